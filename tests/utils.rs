use ruggle::{solution, Oracle};

#[derive(Debug, thiserror::Error)]
#[error("{missing:?} were not found and {unexpected:?} should not have been")]
struct GridErrors {
	missing: Vec<String>,
	unexpected: Vec<String>,
}

/// Solves `letters` and checks the exact set of words found
pub(crate) fn test_grid(
	letters: &str,
	oracle: &impl Oracle,
	min_length: usize,
	expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let found = solution(letters, oracle, min_length);

	let mut missing = expected
		.iter()
		.filter(|w| {
			if found.contains(**w) {
				log::info!("{w} is indeed found");
				false
			} else {
				log::error!("{w} is supposed to be found but is not");
				true
			}
		})
		.map(|w| (*w).to_owned())
		.collect::<Vec<_>>();

	let mut unexpected = found
		.iter()
		.filter(|w| !expected.contains(&w.as_str()))
		.inspect(|w| log::error!("{w} is not supposed to be found"))
		.cloned()
		.collect::<Vec<_>>();

	if missing.is_empty() && unexpected.is_empty() {
		Ok(())
	} else {
		missing.sort();
		unexpected.sort();
		Err(Box::new(GridErrors {
			missing,
			unexpected,
		}))
	}
}
