//! Pointer scenarios: timestamped input for replaying a levitation surface.
//!
//! Scenarios are JSONL, one event per line. Lines starting with `#` are
//! comments. Positions are in content-local pixels.

use serde::{Deserialize, Serialize};

use crate::geometry::{IntSize, Offset};

/// Nanoseconds since scenario start.
pub type TimestampNs = u64;

/// A pointer event as delivered to the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Offset),
    Move(Offset),
    Up(Offset),
    Cancel,
}

/// A single scenario line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvent {
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    #[serde(flatten)]
    pub kind: ScenarioKind,
}

/// Scenario payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Layout reported a new content size.
    Size { width: u32, height: u32 },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    /// Programmatic press; `pivot` defaults to the configured pivot.
    Press {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pivot: Option<Offset>,
    },
    /// Enable or disable the effect.
    Enable { enabled: bool },
}

impl ScenarioEvent {
    pub fn size(timestamp_ns: TimestampNs, width: u32, height: u32) -> Self {
        Self {
            timestamp_ns,
            kind: ScenarioKind::Size { width, height },
        }
    }

    pub fn down(timestamp_ns: TimestampNs, x: f32, y: f32) -> Self {
        Self {
            timestamp_ns,
            kind: ScenarioKind::Down { x, y },
        }
    }

    pub fn moved(timestamp_ns: TimestampNs, x: f32, y: f32) -> Self {
        Self {
            timestamp_ns,
            kind: ScenarioKind::Move { x, y },
        }
    }

    pub fn up(timestamp_ns: TimestampNs, x: f32, y: f32) -> Self {
        Self {
            timestamp_ns,
            kind: ScenarioKind::Up { x, y },
        }
    }

    pub fn press(timestamp_ns: TimestampNs, pivot: Option<Offset>) -> Self {
        Self {
            timestamp_ns,
            kind: ScenarioKind::Press { pivot },
        }
    }

    /// Pointer payload, if this line carries one.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match self.kind {
            ScenarioKind::Down { x, y } => Some(PointerEvent::Down(Offset::new(x, y))),
            ScenarioKind::Move { x, y } => Some(PointerEvent::Move(Offset::new(x, y))),
            ScenarioKind::Up { x, y } => Some(PointerEvent::Up(Offset::new(x, y))),
            ScenarioKind::Cancel => Some(PointerEvent::Cancel),
            _ => None,
        }
    }

    /// Content size payload, if this line carries one.
    pub fn content_size(&self) -> Option<IntSize> {
        match self.kind {
            ScenarioKind::Size { width, height } => Some(IntSize::new(width, height)),
            _ => None,
        }
    }
}

/// Parse a scenario from JSONL content.
///
/// Events are returned in timestamp order; lines with equal timestamps
/// keep their file order.
pub fn parse_scenario(jsonl: &str) -> Result<Vec<ScenarioEvent>, serde_json::Error> {
    let mut events = jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect::<Result<Vec<ScenarioEvent>, _>>()?;
    events.sort_by_key(|event| event.timestamp_ns);
    Ok(events)
}

/// Serialize a scenario to JSONL.
pub fn serialize_scenario(events: &[ScenarioEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format() {
        let event = ScenarioEvent::down(16_000_000, 120.0, 40.0);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"t\":16000000"));
        assert!(json.contains("\"type\":\"down\""));
        assert!(json.contains("\"x\":120.0"));
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let events = vec![
            ScenarioEvent::size(0, 300, 200),
            ScenarioEvent::down(10, 150.0, 100.0),
            ScenarioEvent::moved(20, 160.0, 90.0),
            ScenarioEvent::up(30, 160.0, 90.0),
            ScenarioEvent::press(40, None),
            ScenarioEvent::press(50, Some(Offset::new(0.0, 1.0))),
        ];
        let jsonl = serialize_scenario(&events).unwrap();
        assert_eq!(parse_scenario(&jsonl).unwrap(), events);
    }

    #[test]
    fn test_parse_skips_comments_and_sorts() {
        let jsonl = "# header\n\
            {\"t\":20,\"type\":\"cancel\"}\n\
            \n\
            {\"t\":10,\"type\":\"size\",\"width\":10,\"height\":20}\n";
        let events = parse_scenario(jsonl).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].content_size(), Some(IntSize::new(10, 20)));
        assert_eq!(events[1].pointer_event(), Some(PointerEvent::Cancel));
    }

    #[test]
    fn test_press_without_pivot() {
        let event: ScenarioEvent = serde_json::from_str(r#"{"t":5,"type":"press"}"#).unwrap();
        assert_eq!(event.kind, ScenarioKind::Press { pivot: None });
        assert_eq!(event.pointer_event(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(parse_scenario(r#"{"t":0,"type":"hover"}"#).is_err());
    }
}
