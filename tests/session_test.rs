//! Last-writer-wins behaviour of overlapping requests.

mod common;

use async_trait::async_trait;
use dyeatlas::error::{ComposeError, ImageError};
use dyeatlas::services::{ImageKind, ImageSource, InMemoryImageSource};
use std::time::Duration;
use swatch_engine::{Field, PixelBuffer};

use common::{fixtures, TestWorkspace};

/// Delays sample loads whose name starts with `slow`
struct SlowSource {
    inner: InMemoryImageSource,
    delay: Duration,
}

#[async_trait]
impl ImageSource for SlowSource {
    async fn load(&self, kind: ImageKind, name: &str) -> Result<PixelBuffer, ImageError> {
        if name.starts_with("slow") {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.load(kind, name).await
    }
}

fn source() -> SlowSource {
    let red = fixtures::find("madder_alum_acid.png");
    let yellow = fixtures::find("weld_alum_neutral.png");
    SlowSource {
        inner: InMemoryImageSource::new()
            .with(
                ImageKind::Sample,
                "slow_red.png",
                PixelBuffer::solid(20, 20, red.rgb).unwrap(),
            )
            .with(
                ImageKind::Sample,
                "fast_yellow.png",
                PixelBuffer::solid(20, 20, yellow.rgb).unwrap(),
            ),
        delay: Duration::from_millis(50),
    }
}

#[tokio::test]
async fn test_newer_request_wins() {
    let ws = TestWorkspace::new();
    let session = ws.session().await;
    let source = source();

    let (older, newer) = tokio::join!(
        session.compose_mosaic(&source, "slow_red.png"),
        session.compose_mosaic(&source, "fast_yellow.png"),
    );

    assert!(matches!(
        older,
        Err(ComposeError::StaleRequest { ticket: 1, latest: 2 })
    ));
    let mosaic = newer.unwrap();
    let yellow = fixtures::find("weld_alum_neutral.png");
    assert!(mosaic.tiles().all(|t| t.swatch.filename == yellow.filename));
}

#[tokio::test]
async fn test_state_change_supersedes_in_flight_request() {
    let ws = TestWorkspace::new();
    let session = ws.session().await;
    let source = source();

    let change = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        session
            .set_selection(Field::Dyestuff, Some(vec!["Weld".to_string()]))
            .await
    };
    let (result, _) = tokio::join!(session.compose_mosaic(&source, "slow_red.png"), change);
    assert!(matches!(result, Err(ComposeError::StaleRequest { .. })));

    // Re-issuing after the change sees the new filter
    let mosaic = session
        .compose_mosaic(&source, "slow_red.png")
        .await
        .unwrap();
    assert!(mosaic.tiles().all(|t| t.swatch.dyestuff == "Weld"));
}

#[tokio::test]
async fn test_sequential_requests_all_succeed() {
    let ws = TestWorkspace::new();
    let session = ws.session().await;
    let source = source();

    for name in ["fast_yellow.png", "slow_red.png", "fast_yellow.png"] {
        assert!(session.compose_mosaic(&source, name).await.is_ok());
    }
}
