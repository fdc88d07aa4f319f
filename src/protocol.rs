use serde_json::{json, Value};

use crate::types::Mode;

pub const TSTAT_PATH: &str = "/tstat";

pub fn tstat_url(base_url: &str) -> String {
    format!("{base_url}{TSTAT_PATH}")
}

pub fn set_mode_body(mode: Mode) -> Value {
    json!({ "tmode": mode.code() })
}

/// Setpoint command for the current mode. Only Heat and Cool carry a setpoint.
pub fn set_setpoint_body(mode: Mode, temp: i32) -> Option<Value> {
    match mode {
        Mode::Heat => Some(json!({ "tmode": mode.code(), "t_heat": temp })),
        Mode::Cool => Some(json!({ "tmode": mode.code(), "t_cool": temp })),
        Mode::Off | Mode::Auto => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_tstat() {
        assert_eq!(tstat_url("http://10.0.0.5"), "http://10.0.0.5/tstat");
    }

    #[test]
    fn mode_body() {
        assert_eq!(set_mode_body(Mode::Auto), json!({"tmode": 3}));
        assert_eq!(set_mode_body(Mode::Off), json!({"tmode": 0}));
    }

    #[test]
    fn setpoint_body_uses_field_for_mode() {
        assert_eq!(
            set_setpoint_body(Mode::Heat, 68),
            Some(json!({"tmode": 1, "t_heat": 68}))
        );
        assert_eq!(
            set_setpoint_body(Mode::Cool, 74),
            Some(json!({"tmode": 2, "t_cool": 74}))
        );
    }

    #[test]
    fn setpoint_body_absent_outside_heat_and_cool() {
        assert_eq!(set_setpoint_body(Mode::Off, 70), None);
        assert_eq!(set_setpoint_body(Mode::Auto, 70), None);
    }
}
