//! Runtime harness that turns a plan into deferred reveals.
use crate::{RevealPlan, RevealStep, Result};
use std::sync::Arc;
use tokio::{task::JoinHandle, time::sleep};

/// Receives reveals as their delays elapse.
///
/// Reveals for distinct delays arrive in index order but no
/// ordering is guaranteed between separate plans. A target
/// that can no longer display a step should ignore it.
pub trait RevealTarget: Send + Sync + 'static {
    /// Make the character for a step visible.
    fn reveal(&self, step: &RevealStep);
}

impl<F> RevealTarget for F
where
    F: Fn(&RevealStep) + Send + Sync + 'static,
{
    fn reveal(&self, step: &RevealStep) {
        (self)(step)
    }
}

/// Handles for the spawned reveals of a plan.
///
/// Dropping the value does not cancel the reveals.
#[derive(Debug)]
pub struct Scheduled {
    handles: Vec<JoinHandle<()>>,
}

impl Scheduled {
    /// Number of spawned reveals.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Determine if nothing was spawned.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every reveal to fire.
    pub async fn join(self) -> Result<()> {
        for handle in self.handles {
            handle.await?;
        }
        Ok(())
    }
}

/// Spawn one fire-and-forget task per step that sleeps for the
/// step delay and then reveals the step on the target.
///
/// Must be called from within a tokio runtime.
pub fn schedule<T: RevealTarget>(
    plan: &RevealPlan,
    target: Arc<T>,
) -> Scheduled {
    tracing::debug!(
        steps = plan.len(),
        stagger = plan.stagger().seconds(),
        "reveal::schedule"
    );
    let handles = plan
        .iter()
        .map(|step| {
            let target = Arc::clone(&target);
            tokio::spawn(async move {
                sleep(step.delay()).await;
                target.reveal(&step);
            })
        })
        .collect();
    Scheduled { handles }
}
