//! Background listing tests for rex
//!
//! Listings are requested from the worker thread and received back over the response channel.

use rex_explorer::core::{Formatter, Inspector, InspectError, WorkerResponse, Workers};
use std::error;
use std::fs::File;
use std::time::Duration;
use tempfile::tempdir;

const TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn test_listing_is_handed_back() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("song.flac"))?;

    let workers: Workers<&'static str> = Workers::spawn(Inspector::default(), Formatter::default());
    assert!(workers.request_listing(dir.path().to_path_buf(), "main", 7));

    match workers.response_rx().recv_timeout(TIMEOUT)? {
        WorkerResponse::ListingLoaded {
            path,
            listing,
            request_id,
        } => {
            assert_eq!(path, dir.path());
            assert_eq!(request_id, 7);
            let types: Vec<_> = listing.records().iter().map(|r| r.display_type()).collect();
            assert_eq!(types, vec!["PARENT", "FLAC"]);
            assert!(listing.records().iter().all(|r| *r.context() == "main"));
        }
        other => return Err(format!("unexpected response: {:?}", other).into()),
    }
    Ok(())
}

#[test]
fn test_missing_directory_reports_error() -> Result<(), Box<dyn error::Error>> {
    let workers: Workers<()> = Workers::spawn(Inspector::default(), Formatter::default());
    assert!(workers.request_listing("/path/does/not/exist".into(), (), 3));

    let response = workers.response_rx().recv_timeout(TIMEOUT)?;
    assert_eq!(response.request_id(), 3);
    assert!(matches!(
        response,
        WorkerResponse::Error {
            error: InspectError::NotFound { .. },
            ..
        }
    ));
    Ok(())
}

#[test]
fn test_worker_serves_follow_up_requests() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let workers: Workers<u8> = Workers::spawn(Inspector::default(), Formatter::default());

    for id in 1..=2 {
        assert!(workers.request_listing(dir.path().to_path_buf(), 0, id));
        let response = workers.response_rx().recv_timeout(TIMEOUT)?;
        assert_eq!(response.request_id(), id);
    }
    Ok(())
}

#[test]
fn test_queued_requests_from_two_views_are_all_answered() -> Result<(), Box<dyn error::Error>> {
    let left = tempdir()?;
    let right = tempdir()?;
    File::create(right.path().join("notes.txt"))?;

    let workers: Workers<&'static str> = Workers::spawn(Inspector::default(), Formatter::default());
    assert!(workers.request_listing(left.path().to_path_buf(), "warmup", 1));
    assert!(workers.request_listing(left.path().to_path_buf(), "left-pane", 2));
    assert!(workers.request_listing(right.path().to_path_buf(), "right-pane", 3));

    let mut answered = Vec::new();
    for _ in 0..3 {
        match workers.response_rx().recv_timeout(TIMEOUT)? {
            WorkerResponse::ListingLoaded {
                listing,
                request_id,
                ..
            } => {
                let view = listing
                    .records()
                    .first()
                    .map(|r| *r.context())
                    .ok_or("listing has no parent row")?;
                answered.push((request_id, view));
            }
            other => return Err(format!("unexpected response: {:?}", other).into()),
        }
    }

    assert_eq!(
        answered,
        vec![(1, "warmup"), (2, "left-pane"), (3, "right-pane")]
    );
    Ok(())
}
