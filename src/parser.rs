// Payload-shape and field-name normalization for backend equipment data.
//
// The backend is not consistent: the record list may arrive bare or wrapped
// under `data`, `items` or `results`, and field names flip between
// snake_case and camelCase depending on which endpoint revision served the
// request. Nothing here raises; malformed input degrades to empty.
use crate::model::Equipment;
use serde_json::Value;

/// Unwraps whatever shape the backend returned into an ordered record list.
pub fn records_from_payload(payload: &Value) -> Vec<Value> {
    if let Some(list) = payload.as_array() {
        return list.clone();
    }
    for key in ["data", "items", "results"] {
        if let Some(list) = payload.get(key).and_then(Value::as_array) {
            return list.clone();
        }
    }
    Vec::new()
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Primary key, then the alias, then empty string.
fn field(record: &Value, primary: &str, fallback: &str) -> String {
    record
        .get(primary)
        .and_then(scalar_string)
        .or_else(|| record.get(fallback).and_then(scalar_string))
        .unwrap_or_default()
}

fn single(record: &Value, key: &str) -> String {
    record.get(key).and_then(scalar_string).unwrap_or_default()
}

/// Ingestion-time adapter: resolves all field aliases once so the rest of
/// the crate only ever sees the canonical shape.
pub fn equipment_from_value(record: &Value) -> Equipment {
    Equipment {
        equipment_id: single(record, "equipment_id"),
        name: field(record, "equipment_name", "name"),
        status: field(record, "status", "equipment_status"),
        asset_no: field(record, "asset_no", "assetNo"),
        plate_serial_no: field(record, "plate_serial_no", "plateSerialNo"),
        department: field(record, "zone_department", "department"),
        day_driver_name: field(record, "day_shift_driver_name", "dayDriverName"),
        day_driver_phone: field(record, "day_shift_driver_phone", "dayDriverPhone"),
        night_driver_name: field(record, "night_shift_driver_name", "nightDriverName"),
        night_driver_phone: field(record, "night_shift_driver_phone", "nightDriverPhone"),
        shift_type: single(record, "shift_type"),
        company_supplier: single(record, "company_supplier"),
        remarks: single(record, "remarks"),
    }
}

pub fn parse_equipment(payload: &Value) -> Vec<Equipment> {
    records_from_payload(payload)
        .iter()
        .map(equipment_from_value)
        .collect()
}
