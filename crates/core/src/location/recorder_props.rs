//! Property-based tests for the recorder lifecycle.
//!
//! Each case drives one recorder through a random sequence of starts, stops
//! and clock advances on a paused current-thread runtime.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use proptest::prelude::*;

use super::*;

const INTERVAL: Duration = Duration::from_secs(60);

/// Every third request fails.
#[derive(Debug, Default)]
struct FlakyProvider {
    calls: AtomicUsize,
}

impl PositionProvider for FlakyProvider {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Position, PositionError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) % 3 == 2 {
            Err(PositionError::PositionUnavailable("no fix".into()))
        } else {
            Ok(Position::new(23.81, 90.41))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Stop,
    /// Let this many intervals pass.
    Advance(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Stop),
        (0u32..4).prop_map(Op::Advance),
    ]
}

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

/// Gives the ticker task a chance to finish a due sample.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Points are empty right after a start from idle, never shrink while
    /// active, and stay frozen once stopped.
    #[test]
    fn prop_points_reset_on_start_and_grow_while_active(
        ops in prop::collection::vec(op_strategy(), 1..24)
    ) {
        paused_runtime().block_on(async {
            let recorder = LocationTrailRecorder::new(
                FlakyProvider::default(),
                RecorderSettings {
                    interval: INTERVAL,
                    options: PositionOptions::default(),
                },
            );
            let mut seen = 0usize;
            let mut frozen: Option<usize> = None;

            for op in ops {
                match op {
                    Op::Start => {
                        let was_active = recorder.is_active();
                        let before = recorder.point_count();
                        let trail = recorder.start().unwrap();
                        prop_assert!(trail.is_active);
                        if was_active {
                            prop_assert_eq!(trail.len(), before);
                        } else {
                            prop_assert!(trail.is_empty());
                            prop_assert!(recorder.snapshot().is_empty());
                            seen = 0;
                            frozen = None;
                        }
                    }
                    Op::Stop => {
                        recorder.stop();
                        frozen = Some(recorder.point_count());
                    }
                    Op::Advance(intervals) => {
                        tokio::time::sleep(INTERVAL * intervals).await;
                        settle().await;
                    }
                }

                let count = recorder.point_count();
                if recorder.is_active() {
                    prop_assert!(count >= seen, "trail shrank from {} to {}", seen, count);
                    seen = count;
                } else if let Some(frozen) = frozen {
                    prop_assert_eq!(count, frozen);
                }
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
