use serde_json::Value;

/// Type/range contract for one required field.
#[derive(Clone, Copy, Debug)]
pub enum FieldCheck {
    /// Integer >= 0. An integer-valued float (`5.0`) does not qualify.
    UInt,
    /// Integer or real.
    Number,
    /// Integer or real within the inclusive range.
    NumberInRange(f64, f64),
}

impl FieldCheck {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldCheck::UInt => value.as_u64().is_some(),
            FieldCheck::Number => value.as_f64().is_some(),
            FieldCheck::NumberInRange(lo, hi) => {
                value.as_f64().map(|n| *lo <= n && n <= *hi).unwrap_or(false)
            }
        }
    }
}

/// Required-key/type contract for one record kind. A pure predicate: extra
/// keys are permitted and ignored, the record is never mutated, non-object
/// records fail because every required key is absent.
pub struct RecordSchema {
    pub fields: &'static [(&'static str, FieldCheck)],
}

impl RecordSchema {
    pub fn validate(&self, record: &Value) -> bool {
        self.fields
            .iter()
            .all(|(key, check)| record.get(key).map(|v| check.accepts(v)).unwrap_or(false))
    }
}

pub const LOAD_RECORD: RecordSchema = RecordSchema {
    fields: &[
        ("loadId", FieldCheck::UInt),
        ("x", FieldCheck::Number),
        ("y", FieldCheck::Number),
    ],
};

pub const ROBOT_RECORD: RecordSchema = RecordSchema {
    fields: &[
        ("robotId", FieldCheck::UInt),
        ("batteryLevel", FieldCheck::NumberInRange(0.0, 100.0)),
        ("x", FieldCheck::Number),
        ("y", FieldCheck::Number),
    ],
};
