use std::fs;

use markov_blend_core::delivery::render;
use markov_blend_core::{BlendConfig, BlendError, Blender, Context, FileResolver, MemoryResolver, TextGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

const GETTYSBURG: &str = "Four score and seven years ago our fathers brought forth on this continent, \
a new nation, conceived in Liberty, and dedicated to the proposition that all men are created equal. \
Now we are engaged in a great civil war, testing whether that nation, or any nation so conceived and \
so dedicated, can long endure.";

const GREEN_EGGS: &str = "I do not like them, Sam-I-am.\nI do not like green eggs and ham. \
Would you like them here or there? I would not like them here or there. \
I would not like them anywhere. I do not like green eggs and ham. I do not like them, Sam-I-am.";

#[test]
fn missing_file_is_skipped_and_survivor_seeds() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("gettysburg.txt"), GETTYSBURG).unwrap();

	let blender = Blender::new(FileResolver::with_root(dir.path()).extension("txt"));
	for seed in 0..10 {
		let words = blender
			.blend(&["missing", "gettysburg"], &mut StdRng::seed_from_u64(seed))
			.unwrap();
		assert_eq!(words[0], "Four");
		assert_eq!(words[1], "score");
	}
}

#[test]
fn every_source_missing_is_no_valid_sources() {
	let dir = tempfile::tempdir().unwrap();
	let blender = Blender::new(FileResolver::with_root(dir.path()));

	assert_eq!(
		blender.blend(&["a.txt", "b.txt"], &mut StdRng::seed_from_u64(1)),
		Err(BlendError::NoValidSources)
	);
}

#[test]
fn blended_output_follows_merged_model() {
	let resolver = MemoryResolver::new()
		.with("gettysburg", GETTYSBURG)
		.with("green-eggs", GREEN_EGGS);
	let blender = Blender::new(&resolver).with_generator(TextGenerator::with_step_cap(5_000));
	let (_, model) = blender.build_model(&["gettysburg", "green-eggs"]);

	for seed in 0..25 {
		let words = blender
			.blend(&["gettysburg", "green-eggs"], &mut StdRng::seed_from_u64(seed))
			.unwrap();
		assert!(words[0] == "Four" || words[0] == "I");
		assert!(model.contains(&Context::new(words[0].as_str(), words[1].as_str())));
		for window in words.windows(3) {
			let successors = model
				.successors(&Context::new(window[0].as_str(), window[1].as_str()))
				.unwrap();
			assert!(successors.iter().any(|s| s.as_token() == Some(window[2].as_str())));
		}
	}
}

#[test]
fn newlines_stay_inside_tokens() {
	let resolver = MemoryResolver::new().with("eggs", GREEN_EGGS);
	let (_, model) = Blender::new(resolver).build_model(&["eggs"]);

	assert!(model.contains(&Context::new("them,", "Sam-I-am.\nI")));
}

#[test]
fn config_driven_blend_is_reproducible() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("gettysburg.txt"), GETTYSBURG).unwrap();
	fs::write(dir.path().join("green-eggs.txt"), GREEN_EGGS).unwrap();

	let config = BlendConfig {
		sources: vec!["gettysburg".into(), "green-eggs".into()],
		data_dir: Some(dir.path().to_path_buf()),
		source_extension: Some("txt".into()),
		max_output_chars: 40,
		rng_seed: Some(7),
		..BlendConfig::default()
	};

	let blender = config.file_blender();
	let first = blender
		.blend(config.sources.as_slice(), &mut StdRng::seed_from_u64(7))
		.unwrap();
	let second = blender
		.blend(config.sources.as_slice(), &mut StdRng::seed_from_u64(7))
		.unwrap();
	assert_eq!(first, second);

	let text = render(&first, config.max_output_chars);
	assert!(text.chars().count() <= 40);
}
