//! Tests for sample grouping, state tracking and failure containment

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tilesmith::Bitmap;
    use tilesmith::io::diagnostics::{CollectingDiagnostics, Severity};
    use tilesmith::io::progress::ProgressManager;
    use tilesmith::strategy::{
        BigTile, CreatorConfig, CreatorState, NoiseComposite, RandomTexture, Sample,
        TextureCreator,
    };
    use tilesmith::noise::CoherentNoise;

    // Tests default configuration matches the documented defaults
    // Verified by changing the default output size
    #[test]
    fn test_config_defaults() {
        let config = CreatorConfig::default();

        assert_eq!(config.size, (2048, 2048));
        assert_eq!(config.prefix, "testing");
        assert!(config.snapshot_root.is_none());
        assert!(!config.snapshot_store().is_enabled());
    }

    // Tests snapshots land under <root>/<prefix>
    // Verified by ignoring the prefix when building the store
    #[test]
    fn test_config_snapshot_directory() {
        let config = CreatorConfig::default()
            .with_prefix("run")
            .with_snapshots("shots");

        assert_eq!(config.snapshot_store().directory(), Some(Path::new("shots/run")));
    }

    // Tests the size builder only touches the output size
    // Verified by resetting the prefix inside with_size
    #[test]
    fn test_config_with_size() {
        let config = CreatorConfig::default().with_prefix("sized").with_size(640, 480);

        assert_eq!(config.size, (640, 480));
        assert_eq!(config.prefix, "sized");
        assert!(config.snapshot_root.is_none());
    }

    // Tests group counts round partial groups up and sample-free strategies run once
    // Verified by using floor division
    #[test]
    fn test_group_count() {
        let samples: Vec<Bitmap> = (0..3).map(|_| Bitmap::blank((2, 2))).collect();
        let creator = TextureCreator::new(samples, CreatorConfig::default());

        assert_eq!(creator.group_count(&BigTile::new()), 3);
        assert_eq!(creator.group_count(&NoiseComposite::default()), 2);
        assert_eq!(creator.group_count(&RandomTexture::new(CoherentNoise::simplex(0))), 1);
    }

    // Tests an empty sample list warns once and yields a blank canvas
    // Verified by returning early without reporting
    #[test]
    fn test_empty_samples_warn() {
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let config = CreatorConfig::default().with_size(4, 4);
        let mut creator = TextureCreator::new(Vec::<Sample>::new(), config)
            .with_diagnostics(diagnostics.clone());

        let texture = creator.create_texture(&mut BigTile::new());

        assert_eq!(texture, Bitmap::blank((4, 4)));
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.warnings()[0].contains("Not enough samples"));
        assert_eq!(creator.state(), CreatorState::Done);
    }

    // Tests unreadable samples are reported and skipped
    // Verified by aborting the run on the first load failure
    #[test]
    fn test_unreadable_sample_skipped() {
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let config = CreatorConfig::default().with_size(4, 4);
        let samples = [
            Sample::from(Bitmap::filled_rgba(2, 2, [5, 5, 5, 255])),
            Sample::from(PathBuf::from("definitely/missing/sample.png")),
        ];
        let mut creator = TextureCreator::new(samples, config).with_diagnostics(diagnostics.clone());

        let texture = creator.create_texture(&mut BigTile::new());

        assert_eq!(texture, Bitmap::filled_rgba(4, 4, [5, 5, 5, 255]));
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.warnings()[0].contains("sample.png"));
    }

    // Tests each processed group emits a timing debug message
    // Verified by removing the timing report
    #[test]
    fn test_timing_reported_per_group() {
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let config = CreatorConfig::default().with_size(4, 4);
        let samples = [Bitmap::blank((2, 2)), Bitmap::blank((2, 2))];
        let mut creator = TextureCreator::new(samples, config).with_diagnostics(diagnostics.clone());

        creator.create_texture(&mut BigTile::new());

        let timings = diagnostics
            .events()
            .into_iter()
            .filter(|d| d.severity == Severity::Debug && d.message.starts_with("Time taken"))
            .count();
        assert_eq!(timings, 2);
    }

    // Tests the progress bar advances once per group
    // Verified by advancing once per sample
    #[test]
    fn test_progress_advances_per_group() {
        let samples: Vec<Bitmap> = (0..4).map(|_| Bitmap::filled_rgba(2, 2, [1, 2, 3, 255])).collect();
        let progress = ProgressManager::hidden(2);
        let mut creator = TextureCreator::new(samples, CreatorConfig::default().with_size(4, 4))
            .with_progress(progress.bar());

        creator.create_texture(&mut NoiseComposite::default());

        assert_eq!(progress.position(), 2);
    }

    // Tests process_sample contains strategy errors as a blank canvas
    // Verified by propagating the strategy error
    #[test]
    fn test_process_sample_contains_errors() {
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let mut creator = TextureCreator::new(Vec::<Sample>::new(), CreatorConfig::default().with_size(3, 3))
            .with_diagnostics(diagnostics.clone());

        let texture = creator.process_sample(&mut BigTile::new(), &[]);

        assert_eq!(texture, Bitmap::blank((3, 3)));
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(creator.state(), CreatorState::Idle);
    }

    // Tests sample conversions keep paths and bitmaps apart
    // Verified by decoding paths eagerly
    #[test]
    fn test_sample_conversions() {
        assert!(matches!(Sample::from("a.png"), Sample::Path(p) if p == Path::new("a.png")));
        assert!(matches!(Sample::from(Path::new("b.png")), Sample::Path(_)));

        let bitmap = Bitmap::filled_luma(1, 1, 3);
        let loaded = Sample::from(bitmap.clone()).load().unwrap();
        assert_eq!(loaded, bitmap);

        let creator = TextureCreator::new(["x.png", "y.png"], CreatorConfig::default());
        assert_eq!(creator.samples().len(), 2);
        assert_eq!(creator.config().size, (2048, 2048));
        assert_eq!(creator.state(), CreatorState::Idle);
    }

    // Tests the sample list survives a run so the creator can run again
    // Verified by leaving the sample list empty after processing
    #[test]
    fn test_samples_kept_across_runs() {
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let samples = [
            Bitmap::filled_rgba(2, 2, [40, 50, 60, 255]),
            Bitmap::filled_rgba(2, 2, [70, 80, 90, 255]),
        ];
        let mut creator = TextureCreator::new(samples, CreatorConfig::default().with_size(4, 4))
            .with_diagnostics(diagnostics.clone());

        let first = creator.create_texture(&mut BigTile::new());
        let second = creator.create_texture(&mut BigTile::new());

        assert_eq!(creator.samples().len(), 2);
        assert_eq!(first, second);
        assert_eq!(second, Bitmap::filled_rgba(4, 4, [70, 80, 90, 255]));
        assert_eq!(diagnostics.warning_count(), 0);
    }
}
