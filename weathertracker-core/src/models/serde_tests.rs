//! Wire-format deserialization tests.
//!
//! These payloads mirror what the One Call endpoint actually returns,
//! including the reduced shape produced by the fixed exclusion list
//! (no minutely/hourly/alert blocks).

use super::*;

const TWO_DAY_PAYLOAD: &str = r#"{
    "lat": 40.4983,
    "lon": -3.5676,
    "timezone": "Europe/Madrid",
    "daily": [
        {
            "dt": 1699000000,
            "temp": { "day": 20.0, "min": 15.0, "max": 25.0 },
            "humidity": 65,
            "wind_speed": 5.0,
            "weather": [
                { "description": "partly cloudy", "icon": "02d" }
            ]
        },
        {
            "dt": 1699086400,
            "temp": { "day": 18.0, "min": 13.0, "max": 23.0 },
            "humidity": 70,
            "wind_speed": 6.0,
            "weather": [
                { "description": "rainy", "icon": "10d" }
            ]
        }
    ]
}"#;

#[test]
fn decodes_two_daily_entries() {
    let response: OneCallResponse =
        serde_json::from_str(TWO_DAY_PAYLOAD).expect("payload should decode");

    assert_eq!(response.timezone, "Europe/Madrid");
    assert_eq!(response.daily.len(), 2);

    let first = &response.daily[0];
    assert_eq!(first.dt, 1_699_000_000);
    assert!((first.temp.day - 20.0).abs() < f64::EPSILON);
    assert!((first.temp.min - 15.0).abs() < f64::EPSILON);
    assert!((first.temp.max - 25.0).abs() < f64::EPSILON);
    assert_eq!(first.humidity, 65);
    assert_eq!(first.weather[0].description, "partly cloudy");
    assert_eq!(first.weather[0].icon, "02d");
}

#[test]
fn decodes_entry_without_weather_conditions() {
    let payload = r#"{
        "lat": 40.4983,
        "lon": -3.5676,
        "timezone": "Europe/Madrid",
        "daily": [
            {
                "dt": 1699000000,
                "temp": { "day": 20.0, "min": 15.0, "max": 25.0 },
                "humidity": 65,
                "wind_speed": 5.0
            }
        ]
    }"#;

    let response: OneCallResponse =
        serde_json::from_str(payload).expect("payload should decode");
    assert!(response.daily[0].weather.is_empty());
}

#[test]
fn decodes_empty_daily_array() {
    let payload = r#"{
        "lat": 40.4983,
        "lon": -3.5676,
        "timezone": "Europe/Madrid",
        "daily": []
    }"#;

    let response: OneCallResponse =
        serde_json::from_str(payload).expect("payload should decode");
    assert!(response.daily.is_empty());
}

#[test]
fn rejects_entry_missing_temperature_block() {
    let payload = r#"{
        "lat": 40.4983,
        "lon": -3.5676,
        "timezone": "Europe/Madrid",
        "daily": [
            { "dt": 1699000000, "humidity": 65, "wind_speed": 5.0 }
        ]
    }"#;

    assert!(serde_json::from_str::<OneCallResponse>(payload).is_err());
}

#[test]
fn forecast_day_round_trips_through_json() {
    let day = ForecastDay {
        id: "1699000000_0".to_string(),
        date: 1_699_000_000,
        temp_day: 20.0,
        temp_min: 15.0,
        temp_max: 25.0,
        humidity: 65,
        wind_speed: 5.0,
        description: "partly cloudy".to_string(),
        icon: "02d".to_string(),
    };

    let json = serde_json::to_string(&day).expect("should serialize");
    let back: ForecastDay = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, day);
}
