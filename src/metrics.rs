//! Metrics for the listings view.
//!
//! Recording goes through the `metrics` facade and is a no-op until a
//! recorder is installed, so the view layer records unconditionally.

use std::net::SocketAddr;
use std::sync::Once;
use tracing::{info, warn};

static INIT: Once = Once::new();

/// Naming convention: stay_{area}_{metric_name}[_total]
macro_rules! view_metric {
    (counter, $area:literal, $name:literal) => {
        concat!("stay_", $area, "_", $name, "_total")
    };
    (histogram, $area:literal, $name:literal) => {
        concat!("stay_", $area, "_", $name)
    };
}

/// Install the Prometheus exporter listening on `addr`. Idempotent.
pub fn init_metrics(addr: SocketAddr) {
    INIT.call_once(|| {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
        match builder.install() {
            Ok(()) => {
                register_metrics();
                info!("Prometheus exporter listening on http://{}/metrics", addr);
            }
            Err(e) => {
                warn!("Failed to install Prometheus exporter on {}: {}", addr, e);
            }
        }
    });
}

/// Pre-register so every series shows up on /metrics before first use
fn register_metrics() {
    let _ = ::metrics::counter!(view_metric!(counter, "view", "selections"));
    let _ = ::metrics::counter!(view_metric!(counter, "view", "cards_rendered"));
    let _ = ::metrics::counter!(view_metric!(counter, "booking", "confirmed"));
    let _ = ::metrics::counter!(view_metric!(counter, "booking", "unavailable"));
    let _ = ::metrics::histogram!(view_metric!(histogram, "view", "render_cards"));
}

pub struct ViewMetrics;

impl ViewMetrics {
    pub fn record_selection(cards_rendered: usize) {
        ::metrics::counter!(view_metric!(counter, "view", "selections")).increment(1);
        ::metrics::counter!(view_metric!(counter, "view", "cards_rendered"))
            .increment(cards_rendered as u64);
        ::metrics::histogram!(view_metric!(histogram, "view", "render_cards"))
            .record(cards_rendered as f64);
    }

    pub fn record_booking_confirmed() {
        ::metrics::counter!(view_metric!(counter, "booking", "confirmed")).increment(1);
    }

    pub fn record_booking_unavailable() {
        ::metrics::counter!(view_metric!(counter, "booking", "unavailable")).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_naming_convention() {
        assert_eq!(
            view_metric!(counter, "view", "selections"),
            "stay_view_selections_total"
        );
        assert_eq!(
            view_metric!(counter, "booking", "unavailable"),
            "stay_booking_unavailable_total"
        );
        assert_eq!(
            view_metric!(histogram, "view", "render_cards"),
            "stay_view_render_cards"
        );
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        ViewMetrics::record_selection(3);
        ViewMetrics::record_booking_confirmed();
        ViewMetrics::record_booking_unavailable();
    }
}
