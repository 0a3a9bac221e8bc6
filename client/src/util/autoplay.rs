//! Timer loop that drives carousel autoplay while a component is mounted.

use leptos::prelude::*;

use crate::state::carousel::Carousel;

/// Call [`Carousel::tick`] on `carousel` every autoplay interval until the
/// owning component is cleaned up. Paused carousels skip the step. No-op
/// during server rendering.
pub fn spawn_autoplay(carousel: RwSignal<Carousel>) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::state::carousel::AUTOPLAY_INTERVAL_MS,
                ))
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if carousel.try_update(|c| c.tick()).is_none() {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = carousel;
    }
}
