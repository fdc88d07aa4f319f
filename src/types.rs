use std::fmt;

use chrono::Weekday;
use serde::Deserialize;

use crate::Error;

/// Lowest setpoint the device accepts, whole degrees F.
pub const MIN_SETPOINT: i32 = 50;
/// Highest setpoint the device accepts, whole degrees F.
pub const MAX_SETPOINT: i32 = 90;

pub const UNKNOWN: &str = "Unknown";

/// An integer code reported by the thermostat, backed by a fixed label table.
///
/// Codes missing from `TABLE` have no variant and render as [`UNKNOWN`].
pub trait Coded: Copy + PartialEq + 'static {
    const TABLE: &'static [(i64, Self, &'static str)];

    fn from_code(code: i64) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, v, _)| *v)
    }

    fn label(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, v, _)| v == self)
            .map(|(_, _, label)| *label)
            .unwrap_or(UNKNOWN)
    }
}

/// Label for a raw device code, falling back to [`UNKNOWN`].
pub fn label_for<T: Coded>(code: i64) -> &'static str {
    T::from_code(code).map(|v| v.label()).unwrap_or(UNKNOWN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off = 0,
    Heat = 1,
    Cool = 2,
    Auto = 3,
}

impl Mode {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl Coded for Mode {
    const TABLE: &'static [(i64, Self, &'static str)] = &[
        (0, Mode::Off, "Off"),
        (1, Mode::Heat, "Heat"),
        (2, Mode::Cool, "Cool"),
        (3, Mode::Auto, "Auto"),
    ];
}

impl TryFrom<i64> for Mode {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Mode::from_code(code).ok_or(Error::InvalidMode(code))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingState {
    Off,
    Heating,
    Cooling,
}

impl Coded for OperatingState {
    const TABLE: &'static [(i64, Self, &'static str)] = &[
        (0, OperatingState::Off, "Off"),
        (1, OperatingState::Heating, "Heating"),
        (2, OperatingState::Cooling, "Cooling"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanMode {
    Auto,
    Circulate,
    On,
}

impl Coded for FanMode {
    const TABLE: &'static [(i64, Self, &'static str)] = &[
        (0, FanMode::Auto, "Auto"),
        (1, FanMode::Circulate, "Circulate"),
        (2, FanMode::On, "On"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanState {
    Off,
    On,
}

impl Coded for FanState {
    const TABLE: &'static [(i64, Self, &'static str)] =
        &[(0, FanState::Off, "Off"), (1, FanState::On, "On")];
}

/// On/off flag used by the `override` and `hold` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Off,
    On,
}

impl Coded for Flag {
    const TABLE: &'static [(i64, Self, &'static str)] =
        &[(0, Flag::Off, "Off"), (1, Flag::On, "On")];
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Device clock as reported in `/tstat`. `day` counts from Monday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DeviceTime {
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
}

impl DeviceTime {
    pub fn weekday(&self) -> Option<Weekday> {
        usize::try_from(self.day)
            .ok()
            .and_then(|d| WEEKDAYS.get(d).copied())
    }
}

impl fmt::Display for DeviceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weekday() {
            Some(day) => write!(f, "{day} {:02}:{:02}", self.hour, self.minute),
            None => f.write_str(UNKNOWN),
        }
    }
}

/// One `/tstat` poll. Fields the device omits decode to zero.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThermostatStatus {
    pub temp: f64,
    pub tmode: i64,
    pub fmode: i64,
    #[serde(rename = "override")]
    pub override_flag: i64,
    pub hold: i64,
    pub t_heat: f64,
    pub t_cool: f64,
    pub tstate: i64,
    pub fstate: i64,
    pub time: DeviceTime,
    pub t_type_post: i64,
}

impl ThermostatStatus {
    pub fn mode(&self) -> Option<Mode> {
        Mode::from_code(self.tmode)
    }

    /// The active setpoint: heat if set, otherwise cool if set.
    pub fn target_setpoint(&self) -> Option<f64> {
        if self.t_heat != 0.0 {
            Some(self.t_heat)
        } else if self.t_cool != 0.0 {
            Some(self.t_cool)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_label() {
        for (code, variant, label) in Mode::TABLE {
            assert_eq!(variant.label(), *label);
            assert_eq!(variant.code(), *code);
        }
    }

    #[test]
    fn mode_try_from_rejects_out_of_range() {
        assert_eq!(Mode::try_from(2).unwrap(), Mode::Cool);
        assert!(matches!(Mode::try_from(4), Err(Error::InvalidMode(4))));
        assert!(matches!(Mode::try_from(-1), Err(Error::InvalidMode(-1))));
    }

    #[test]
    fn decodes_partial_body_with_defaults() {
        let status: ThermostatStatus =
            serde_json::from_str(r#"{"temp":70.5,"tmode":1,"t_heat":68}"#).unwrap();
        assert_eq!(status.temp, 70.5);
        assert_eq!(status.mode(), Some(Mode::Heat));
        assert_eq!(status.t_cool, 0.0);
        assert_eq!(status.time, DeviceTime::default());
    }

    #[test]
    fn decodes_override_keyword_field() {
        let status: ThermostatStatus = serde_json::from_str(r#"{"override":1}"#).unwrap();
        assert_eq!(status.override_flag, 1);
    }

    #[test]
    fn device_time_display() {
        let t = DeviceTime { day: 0, hour: 14, minute: 5 };
        assert_eq!(t.to_string(), "Mon 14:05");
        let t = DeviceTime { day: 6, hour: 7, minute: 30 };
        assert_eq!(t.to_string(), "Sun 07:30");
        let t = DeviceTime { day: 7, hour: 0, minute: 0 };
        assert_eq!(t.weekday(), None);
        assert_eq!(t.to_string(), "Unknown");
    }
}
