//! Period chain maintenance.
//!
//! Versions form a chronologically ordered, non-overlapping sequence: each
//! version's `end_period` mirrors the start of its immediate successor. The
//! functions here are the only writers of `end_period`.

use crate::cli::SortOrder;
use crate::domain::error::EngineError;
use crate::domain::models::Version;
use chrono::NaiveDate;

const PERIOD_FORMAT: &str = "%Y-%m-%d";

/// Lenient period parsing: empty or malformed input sorts as the minimum
/// date instead of rejecting the record.
pub fn parse_period(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), PERIOD_FORMAT).unwrap_or(NaiveDate::MIN)
}

fn sort_key(v: &Version) -> (NaiveDate, NaiveDate) {
    let end = v
        .end_period
        .as_deref()
        .map(parse_period)
        .unwrap_or(NaiveDate::MIN);
    (parse_period(&v.start_period), end)
}

/// Index of the version with the greatest start strictly before `start`.
/// Strict comparison keeps the earliest-inserted candidate on start ties.
fn predecessor_of(versions: &[Version], start: NaiveDate, exclude: Option<u64>) -> Option<usize> {
    let mut best: Option<(usize, NaiveDate)> = None;
    for (i, v) in versions.iter().enumerate() {
        if exclude == Some(v.id) {
            continue;
        }
        let s = parse_period(&v.start_period);
        if s < start && best.map(|(_, b)| s > b).unwrap_or(true) {
            best = Some((i, s));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the version with the smallest start strictly after `start`.
fn successor_of(versions: &[Version], start: NaiveDate, exclude: Option<u64>) -> Option<usize> {
    let mut best: Option<(usize, NaiveDate)> = None;
    for (i, v) in versions.iter().enumerate() {
        if exclude == Some(v.id) {
            continue;
        }
        let s = parse_period(&v.start_period);
        if s > start && best.map(|(_, b)| s < b).unwrap_or(true) {
            best = Some((i, s));
        }
    }
    best.map(|(i, _)| i)
}

/// Insert a new version into the chain, assigning the next free id.
///
/// The immediate predecessor (if any) is closed at the new start; the new
/// version is closed at its immediate successor's start when one already
/// exists, and left open otherwise.
pub fn insert(versions: &mut Vec<Version>, name: &str, start_period: &str) -> Version {
    let id = versions.iter().map(|v| v.id).max().unwrap_or(0) + 1;
    let start = parse_period(start_period);

    if let Some(p) = predecessor_of(versions, start, None) {
        versions[p].end_period = Some(start_period.to_string());
    }
    let end_period =
        successor_of(versions, start, None).map(|i| versions[i].start_period.clone());

    let version = Version {
        id,
        version_name: name.to_string(),
        start_period: start_period.to_string(),
        end_period,
        item_ids: Vec::new(),
    };
    versions.push(version.clone());
    version
}

/// Move a version to a new start period.
///
/// Only the newly adjacent predecessor is repaired; the old predecessor keeps
/// its now-stale `end_period` until a later reschedule touches it. That
/// partial-repair policy is externally observable behavior and must be kept.
pub fn reschedule(
    versions: &mut [Version],
    id: u64,
    new_start: &str,
) -> Result<Version, EngineError> {
    let idx = versions
        .iter()
        .position(|v| v.id == id)
        .ok_or(EngineError::VersionNotFound(id))?;

    if versions[idx].start_period != new_start {
        versions[idx].start_period = new_start.to_string();
        let start = parse_period(new_start);
        if let Some(p) = predecessor_of(versions, start, Some(id)) {
            versions[p].end_period = Some(new_start.to_string());
        }
    }
    Ok(versions[idx].clone())
}

/// Versions sorted by (start, end). The sort is stable, so records with
/// identical periods keep insertion order.
pub fn ordered(versions: &[Version], order: SortOrder) -> Vec<Version> {
    let mut out = versions.to_vec();
    out.sort_by_key(sort_key);
    if matches!(order, SortOrder::Desc) {
        out.reverse();
    }
    out
}

/// Chronologically adjacent versions around `id`; either side may be absent.
pub fn neighbors(
    versions: &[Version],
    id: u64,
) -> Result<(Option<Version>, Option<Version>), EngineError> {
    let target = versions
        .iter()
        .find(|v| v.id == id)
        .ok_or(EngineError::VersionNotFound(id))?;
    let start = parse_period(&target.start_period);
    let previous = predecessor_of(versions, start, Some(id)).map(|i| versions[i].clone());
    let next = successor_of(versions, start, Some(id)).map(|i| versions[i].clone());
    Ok((previous, next))
}
