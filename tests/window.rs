use anyhow::Result;
use slidingwindow::{parse_config, Window, WindowConfig, WindowError};
use std::sync::{Arc, Once};
use std::thread;
use tracing_subscriber::EnvFilter;

// Structured logging for test runs — RUST_LOG controls verbosity (default: off).
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn configured_window_slides() -> Result<()> {
    init_tracing();
    let window = parse_config("[window]\ncapacity = 4\nwindow_size = 2\n")?.build_shared()?;

    let mut seen = Vec::new();
    for v in 1..=6 {
        window.add(f64::from(v));
        seen.push(window.snapshot());
    }

    assert_eq!(
        seen,
        vec![
            vec![1.0],
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            vec![3.0, 4.0],
            vec![4.0, 5.0],
            vec![5.0, 6.0],
        ]
    );
    Ok(())
}

#[test]
fn oversized_config_is_rejected() {
    init_tracing();
    let err = WindowConfig::new(3, 10).build().unwrap_err();
    assert!(matches!(err, WindowError::Configuration { .. }));
    assert!(err.to_string().starts_with("capacity smaller than window size"));
}

#[test]
fn drain_and_reload() -> Result<()> {
    init_tracing();
    let window = Window::new(4, 2)?;
    window.load(&[1.0, 2.0, 3.0]);
    assert_eq!(&*window.view(), &[2.0, 3.0]);

    window.remove();
    window.remove();
    window.remove();
    assert!(window.is_empty());

    window.load(&[4.0]);
    window.load(&[5.0]);
    assert_eq!(&*window.view(), &[4.0, 5.0]);

    window.clear();
    assert!(window.view().is_empty());
    Ok(())
}

#[test]
fn loaders_and_readers_share_a_window() -> Result<()> {
    init_tracing();
    const WINDOW: usize = 5;
    let window = Arc::new(Window::new(12, WINDOW)?);
    let batches: Vec<Vec<f64>> = (0..3)
        .map(|n| (0..WINDOW + 2).map(|i| (n * 100 + i) as f64).collect())
        .collect();

    let loaders: Vec<_> = batches
        .iter()
        .cloned()
        .map(|batch| {
            let window = Arc::clone(&window);
            thread::spawn(move || {
                for _ in 0..500 {
                    window.load(&batch);
                }
            })
        })
        .collect();

    let reader = {
        let window = Arc::clone(&window);
        let batches = batches.clone();
        thread::spawn(move || {
            for _ in 0..2_000 {
                let view = window.view();
                // Empty before the first load, otherwise exactly the tail of
                // one batch; never a mix of two.
                if !view.is_empty() {
                    assert!(
                        batches.iter().any(|b| b[b.len() - WINDOW..] == *view),
                        "{view:?}"
                    );
                }
            }
        })
    };

    for handle in loaders {
        handle.join().expect("loader panicked");
    }
    reader.join().expect("reader panicked");

    assert_eq!(window.len(), WINDOW);
    Ok(())
}
