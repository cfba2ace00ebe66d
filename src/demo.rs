//! Option-group sources for the terminal picker.
//!
//! A source owns the shape of the groups: the date picker rebuilds its day
//! column whenever the year or month changes, a file source is static.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WheelpickError};
use crate::picker::{OptionGroups, PickerOption, Scalar, ValueGroups};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";

/// Groups file format: `{ "optionGroups": {..}, "valueGroups": {..} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsFile {
    pub option_groups: OptionGroups,
    #[serde(default)]
    pub value_groups: ValueGroups,
}

impl GroupsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(contents)?;
        if file.option_groups.is_empty() {
            return Err(WheelpickError::Config("no option groups defined".to_string()));
        }
        Ok(file)
    }
}

/// Where the option groups come from
#[derive(Debug, Clone)]
pub enum GroupSource {
    /// Year / month / day columns
    Date { first_year: i32, last_year: i32 },
    /// Fixed groups loaded from a file
    Static(OptionGroups),
}

impl GroupSource {
    /// Build the option groups for the current values.
    ///
    /// May adjust `values` where the host has a better answer than the
    /// picker's first-option fallback (a day past the end of the month).
    pub fn option_groups(&self, values: &mut ValueGroups) -> OptionGroups {
        match self {
            GroupSource::Static(groups) => groups.clone(),
            GroupSource::Date {
                first_year,
                last_year,
            } => date_groups(*first_year, *last_year, values),
        }
    }
}

/// Initial values for a date.
pub fn date_values(date: NaiveDate) -> ValueGroups {
    let mut values = ValueGroups::new();
    values.insert(YEAR.to_string(), Scalar::from(date.year()));
    values.insert(MONTH.to_string(), Scalar::from(date.month()));
    values.insert(DAY.to_string(), Scalar::from(date.day()));
    values
}

/// Selected date, if the values form one.
pub fn selected_date(values: &ValueGroups) -> Option<NaiveDate> {
    let part = |name: &str| match values.get(name) {
        Some(Scalar::Number(n)) => Some(*n as i64),
        _ => None,
    };
    NaiveDate::from_ymd_opt(
        i32::try_from(part(YEAR)?).ok()?,
        u32::try_from(part(MONTH)?).ok()?,
        u32::try_from(part(DAY)?).ok()?,
    )
}

/// Number of days in a month, `None` for an invalid year/month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

fn date_groups(first_year: i32, last_year: i32, values: &mut ValueGroups) -> OptionGroups {
    let number = |name: &str| match values.get(name) {
        Some(Scalar::Number(n)) => Some(*n),
        _ => None,
    };
    let year = number(YEAR).map(|y| y as i32).unwrap_or(first_year);
    let month = number(MONTH).map(|m| m as u32).unwrap_or(1);
    let day = number(DAY);
    let days = days_in_month(year, month).unwrap_or(31);

    if let Some(day) = day {
        if day > days as f64 {
            values.insert(DAY.to_string(), Scalar::from(days));
        }
    }

    let mut groups = OptionGroups::new();
    groups.insert(
        YEAR.to_string(),
        (first_year..=last_year)
            .map(|y| PickerOption::new(y, y))
            .collect(),
    );
    groups.insert(
        MONTH.to_string(),
        MONTH_LABELS
            .iter()
            .zip(1u32..)
            .map(|(label, m)| PickerOption::new(m, *label))
            .collect(),
    );
    groups.insert(
        DAY.to_string(),
        (1..=days)
            .map(|d| PickerOption::new(d, format!("{:02}", d)))
            .collect(),
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_date_groups_follow_month_length() {
        let source = GroupSource::Date {
            first_year: 2020,
            last_year: 2030,
        };
        let mut values = date_values(date(2024, 2, 10));
        let groups = source.option_groups(&mut values);

        let names: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(names, vec![YEAR, MONTH, DAY]);
        assert_eq!(groups[YEAR].len(), 11);
        assert_eq!(groups[MONTH][1], PickerOption::new(2, "Feb"));
        assert_eq!(groups[DAY].len(), 29);
        assert_eq!(groups[DAY][0].label, Scalar::from("01"));
    }

    #[test]
    fn test_day_is_clamped_when_month_shrinks() {
        let source = GroupSource::Date {
            first_year: 2020,
            last_year: 2030,
        };
        let mut values = date_values(date(2023, 1, 31));
        values.insert(MONTH.to_string(), Scalar::from(4));

        let groups = source.option_groups(&mut values);
        assert_eq!(groups[DAY].len(), 30);
        assert_eq!(values[DAY], Scalar::from(30));
        assert_eq!(selected_date(&values), Some(date(2023, 4, 30)));
    }

    #[test]
    fn test_parse_groups_file() {
        let file = GroupsFile::parse(
            r#"{
                "optionGroups": {
                    "size": [{"value": "s", "label": "Small"}, {"value": "l", "label": "Large"}],
                    "count": [{"value": 1, "label": "one"}, {"value": 2, "label": "two"}]
                },
                "valueGroups": {"size": "l"}
            }"#,
        )
        .unwrap();

        let names: Vec<_> = file.option_groups.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["size", "count"]);
        assert_eq!(file.value_groups["size"], Scalar::from("l"));
        assert!(!file.value_groups.contains_key("count"));
    }

    #[test]
    fn test_groups_file_requires_groups() {
        assert!(GroupsFile::parse(r#"{"optionGroups": {}}"#).is_err());
        assert!(GroupsFile::parse("not json").is_err());
    }
}
