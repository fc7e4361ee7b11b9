//! Recorded output sequences.

use crate::integrator::StepDiagnostics;
use serde::{Deserialize, Serialize};
use std::io;

/// Four index-aligned output sequences, one entry per recorded step.
///
/// The only way to append is [`TimeSeries::record`], which pushes to all
/// four sequences at once, so they always have the same length.
/// Deserialisation rejects misaligned input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesColumns", into = "SeriesColumns")]
pub struct TimeSeries {
    time: Vec<f64>,
    heat_release_rate: Vec<f64>,
    consumption_speed: Vec<f64>,
    flame_position: Vec<f64>,
}

/// One CSV line.
#[derive(Serialize)]
struct SeriesRow {
    time: f64,
    heat_release_rate: f64,
    consumption_speed: f64,
    flame_position: f64,
}

#[derive(Serialize, Deserialize)]
struct SeriesColumns {
    time: Vec<f64>,
    heat_release_rate: Vec<f64>,
    consumption_speed: Vec<f64>,
    flame_position: Vec<f64>,
}

impl TryFrom<SeriesColumns> for TimeSeries {
    type Error = String;

    fn try_from(columns: SeriesColumns) -> Result<Self, Self::Error> {
        let n = columns.time.len();
        let lengths = [
            ("heat_release_rate", columns.heat_release_rate.len()),
            ("consumption_speed", columns.consumption_speed.len()),
            ("flame_position", columns.flame_position.len()),
        ];
        for (name, len) in lengths {
            if len != n {
                return Err(format!(
                    "{} has {} entries but time has {}",
                    name, len, n
                ));
            }
        }
        Ok(Self {
            time: columns.time,
            heat_release_rate: columns.heat_release_rate,
            consumption_speed: columns.consumption_speed,
            flame_position: columns.flame_position,
        })
    }
}

impl From<TimeSeries> for SeriesColumns {
    fn from(series: TimeSeries) -> Self {
        Self {
            time: series.time,
            heat_release_rate: series.heat_release_rate,
            consumption_speed: series.consumption_speed,
            flame_position: series.flame_position,
        }
    }
}

impl TimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample to every sequence.
    pub fn record(&mut self, time: f64, diagnostics: &StepDiagnostics) {
        self.time.push(time);
        self.heat_release_rate.push(diagnostics.heat_release_rate);
        self.consumption_speed.push(diagnostics.consumption_speed);
        self.flame_position.push(diagnostics.flame_position);
    }

    /// Number of recorded samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.time.clear();
        self.heat_release_rate.clear();
        self.consumption_speed.clear();
        self.flame_position.clear();
    }

    /// Simulation times of the recorded samples.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Heat release rate per sample.
    pub fn heat_release_rate(&self) -> &[f64] {
        &self.heat_release_rate
    }

    /// Consumption speed per sample.
    pub fn consumption_speed(&self) -> &[f64] {
        &self.consumption_speed
    }

    /// Flame position per sample.
    pub fn flame_position(&self) -> &[f64] {
        &self.flame_position
    }

    /// Time of the most recent sample.
    pub fn last_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    /// Write as CSV with header
    /// `time,heat_release_rate,consumption_speed,flame_position`.
    ///
    /// An empty series produces just the header line.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record([
            "time",
            "heat_release_rate",
            "consumption_speed",
            "flame_position",
        ])?;

        for i in 0..self.len() {
            writer.serialize(SeriesRow {
                time: self.time[i],
                heat_release_rate: self.heat_release_rate[i],
                consumption_speed: self.consumption_speed[i],
                flame_position: self.flame_position[i],
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(z: f64) -> StepDiagnostics {
        StepDiagnostics {
            heat_release_rate: 1000.0,
            consumption_speed: 0.5,
            flame_position: z,
        }
    }

    #[test]
    fn test_record_keeps_sequences_aligned() {
        let mut series = TimeSeries::new();
        assert!(series.is_empty());

        series.record(0.1, &diag(0.01));
        series.record(0.2, &diag(0.02));

        assert_eq!(series.len(), 2);
        assert_eq!(series.time(), &[0.1, 0.2]);
        assert_eq!(series.heat_release_rate().len(), 2);
        assert_eq!(series.consumption_speed().len(), 2);
        assert_eq!(series.flame_position(), &[0.01, 0.02]);
        assert_eq!(series.last_time(), Some(0.2));

        series.clear();
        assert!(series.is_empty());
        assert_eq!(series.last_time(), None);
    }

    #[test]
    fn test_write_csv() {
        let mut series = TimeSeries::new();
        series.record(0.5, &diag(0.25));

        let mut buf = Vec::new();
        series.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "time,heat_release_rate,consumption_speed,flame_position\n0.5,1000.0,0.5,0.25\n"
        );
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let mut buf = Vec::new();
        TimeSeries::new().write_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "time,heat_release_rate,consumption_speed,flame_position\n"
        );
    }

    #[test]
    fn test_deserialize_rejects_misaligned() {
        let json = r#"{"time":[0.0,1.0],"heat_release_rate":[1.0,2.0],
                       "consumption_speed":[0.1],"flame_position":[0.0,0.0]}"#;
        let err = serde_json::from_str::<TimeSeries>(json).unwrap_err();
        assert!(err.to_string().contains("consumption_speed has 1 entries"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut series = TimeSeries::new();
        series.record(0.1, &diag(0.3));
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(serde_json::from_str::<TimeSeries>(&json).unwrap(), series);
    }
}
