//! Parsing helpers for dates and set specs.

use chrono::{NaiveDate, Utc};

use gymlog_core::models::{ExerciseType, Set};
use gymlog_core::settings::AppSettings;

/// Parse a calendar date: `YYYY-MM-DD`, `today`, or `yesterday`.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    match value.to_ascii_lowercase().as_str() {
        "today" => return Ok(Utc::now().date_naive()),
        "yesterday" => return Ok(Utc::now().date_naive() - chrono::Duration::days(1)),
        _ => {}
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value))
}

/// Parse a set spec against the exercise's type. Formats:
/// - strength: `WEIGHTxREPS[@RPE]` (e.g. `135x5@80`)
/// - bodyweight: `REPS` (e.g. `12`)
/// - cardio: `MINm` or `SECs` (e.g. `20m`, `90s`)
///
/// RPE and rest fall back to the settings defaults.
pub fn parse_set_spec(
    spec: &str,
    exercise_type: ExerciseType,
    settings: &AppSettings,
) -> anyhow::Result<Set> {
    let spec = spec.trim();
    match exercise_type {
        ExerciseType::Strength => parse_strength(spec, settings),
        ExerciseType::Bodyweight => parse_bodyweight(spec, settings),
        ExerciseType::Cardio => parse_cardio(spec),
    }
}

/// Heavier than any barbell; anything above this is a typo.
const MAX_WEIGHT: f64 = 10_000.0;

fn parse_strength(spec: &str, settings: &AppSettings) -> anyhow::Result<Set> {
    let (work, rpe) = match spec.split_once('@') {
        Some((work, rpe_str)) => {
            let rpe: u8 = rpe_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid RPE: {}", rpe_str))?;
            if rpe > 100 {
                return Err(anyhow::anyhow!("RPE must be between 0 and 100: {}", rpe));
            }
            (work, rpe)
        }
        None => (spec, settings.default_rpe),
    };

    let (weight_str, reps_str) = work.split_once(['x', 'X']).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid strength set (expected WEIGHTxREPS[@RPE], e.g. 135x5@80): {}",
            spec
        )
    })?;
    let weight: f64 = weight_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid weight: {}", weight_str))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(anyhow::anyhow!("Weight must be non-negative: {}", weight_str));
    }
    if weight > MAX_WEIGHT {
        return Err(anyhow::anyhow!("Weight is out of range: {}", weight_str));
    }
    let reps = parse_reps(reps_str)?;

    Ok(Set::Strength {
        weight,
        reps,
        rpe,
        rest_seconds: settings.default_rest_seconds,
    })
}

fn parse_bodyweight(spec: &str, settings: &AppSettings) -> anyhow::Result<Set> {
    let reps = parse_reps(spec)?;
    Ok(Set::Bodyweight {
        reps,
        rest_seconds: settings.default_rest_seconds,
    })
}

fn parse_cardio(spec: &str) -> anyhow::Result<Set> {
    let (amount_str, per_minute) = if let Some(rest) = spec.strip_suffix('m') {
        (rest, true)
    } else if let Some(rest) = spec.strip_suffix('s') {
        (rest, false)
    } else {
        return Err(anyhow::anyhow!(
            "Invalid cardio duration (use 20m or 90s): {}",
            spec
        ));
    };
    let amount: u32 = amount_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid cardio duration (use 20m or 90s): {}", spec))?;
    if amount == 0 {
        return Err(anyhow::anyhow!("Cardio duration must be positive: {}", spec));
    }
    let duration_seconds = if per_minute {
        amount
            .checked_mul(60)
            .ok_or_else(|| anyhow::anyhow!("Cardio duration is too long: {}", spec))?
    } else {
        amount
    };
    Ok(Set::Cardio { duration_seconds })
}

fn parse_reps(value: &str) -> anyhow::Result<u32> {
    let reps: u32 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid rep count: {}", value))?;
    if reps == 0 {
        return Err(anyhow::anyhow!("Rep count must be at least 1"));
    }
    Ok(reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AppSettings {
        AppSettings::default()
    }

    #[test]
    fn test_parse_strength_full() {
        let set = parse_set_spec("135x5@80", ExerciseType::Strength, &settings()).unwrap();
        assert_eq!(
            set,
            Set::Strength {
                weight: 135.0,
                reps: 5,
                rpe: 80,
                rest_seconds: 90,
            }
        );
    }

    #[test]
    fn test_parse_strength_defaults_rpe() {
        let set = parse_set_spec("225x3", ExerciseType::Strength, &settings()).unwrap();
        match set {
            Set::Strength { rpe, .. } => assert_eq!(rpe, 80),
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_parse_strength_rejects_garbage() {
        assert!(parse_set_spec("135", ExerciseType::Strength, &settings()).is_err());
        assert!(parse_set_spec("135x0", ExerciseType::Strength, &settings()).is_err());
        assert!(parse_set_spec("135x5@101", ExerciseType::Strength, &settings()).is_err());
        assert!(parse_set_spec("-10x5", ExerciseType::Strength, &settings()).is_err());
        assert!(parse_set_spec("1e300x5", ExerciseType::Strength, &settings()).is_err());
    }

    #[test]
    fn test_parse_bodyweight() {
        let set = parse_set_spec("12", ExerciseType::Bodyweight, &settings()).unwrap();
        assert_eq!(
            set,
            Set::Bodyweight {
                reps: 12,
                rest_seconds: 90,
            }
        );
        assert!(parse_set_spec("12x5", ExerciseType::Bodyweight, &settings()).is_err());
    }

    #[test]
    fn test_parse_cardio() {
        assert_eq!(
            parse_set_spec("20m", ExerciseType::Cardio, &settings()).unwrap(),
            Set::Cardio {
                duration_seconds: 1200,
            }
        );
        assert_eq!(
            parse_set_spec("90s", ExerciseType::Cardio, &settings()).unwrap(),
            Set::Cardio {
                duration_seconds: 90,
            }
        );
        assert!(parse_set_spec("20", ExerciseType::Cardio, &settings()).is_err());
        assert!(parse_set_spec("0m", ExerciseType::Cardio, &settings()).is_err());
        // Minute counts whose seconds exceed u32 are rejected, not wrapped.
        assert!(parse_set_spec("80000000m", ExerciseType::Cardio, &settings()).is_err());
    }

    #[test]
    fn test_parse_date_keywords() {
        assert!(parse_date("today").is_ok());
        assert!(parse_date("2026-08-29").is_ok());
        assert!(parse_date("08/29/2026").is_err());
    }
}
