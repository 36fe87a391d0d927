//! Capture and replay of faults through `Attempt`.

use rstest::rstest;
use std::thread;
use wrapt::control::{Attempt, Fault, Maybe, PanicError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
enum StorageError {
    #[error("disk {0} is full")]
    DiskFull(u8),
    #[error("permission denied")]
    PermissionDenied,
}

fn write_block(disk: u8) -> Result<usize, StorageError> {
    match disk {
        0 => Ok(512),
        1 => Err(StorageError::DiskFull(1)),
        _ => Err(StorageError::PermissionDenied),
    }
}

#[rstest]
#[case(0, Some(512))]
#[case(1, None)]
#[case(2, None)]
fn from_result_captures_domain_errors(#[case] disk: u8, #[case] expected: Option<usize>) {
    let attempt = Attempt::from(write_block(disk));
    assert_eq!(attempt.clone().to_maybe(), Maybe::from(expected));
    if attempt.is_failure() {
        assert!(attempt.fault().downcast_ref::<StorageError>().is_some());
    }
}

#[rstest]
fn catch_records_panic_message_and_location() {
    let failed: Attempt<u8> = Attempt::catch(|| panic!("corrupted header"));
    let fault = failed.fault();
    assert_eq!(fault.message(), "corrupted header");
    assert!(fault.type_name().ends_with("PanicError"));
    assert!(fault.location().file().ends_with("attempt_tests.rs"));
    assert_eq!(
        fault.downcast_ref::<PanicError>(),
        Some(&PanicError { message: "corrupted header".to_string() })
    );
}

#[rstest]
fn catch_records_formatted_panic_message() {
    let block = 7;
    let failed: Attempt<u8> = Attempt::catch(|| panic!("bad block {block}"));
    assert_eq!(failed.fault().message(), "bad block 7");
}

#[rstest]
fn value_or_throw_replays_the_same_token() {
    let first = Attempt::<usize>::from(write_block(1));
    let token = first.fault().clone();

    let replayed = Attempt::catch(|| first.value_or_throw());
    assert!(replayed.fault().is_same_token(&token));
    assert_eq!(replayed.fault().location(), token.location());
}

#[rstest]
fn failures_stay_sticky_through_a_pipeline() {
    let result = Attempt::from(write_block(2))
        .map(|bytes| bytes * 2)
        .bind(|bytes| Attempt::success(bytes + 1))
        .zip(Attempt::success(3), |a, b| a + b);
    assert_eq!(result.fault().downcast_ref::<StorageError>(), Some(&StorageError::PermissionDenied));
}

#[rstest]
fn value_or_else_receives_the_fault() {
    let recovered = Attempt::from(write_block(1)).value_or_else(|fault: Fault| fault.message().len());
    assert_eq!(recovered, "disk 1 is full".len());
}

#[rstest]
fn faults_cross_threads() {
    let failed = Attempt::<usize>::from(write_block(1));
    let token = failed.fault().clone();
    let handle = thread::spawn(move || failed.bind(|bytes| Attempt::success(bytes + 1)));
    let Ok(returned) = handle.join() else {
        panic!("worker thread panicked");
    };
    assert!(returned.fault().is_same_token(&token));
}

#[rstest]
fn rethrow_across_thread_join_is_recoverable() {
    let failed = Attempt::<usize>::from(write_block(2));
    let token = failed.fault().clone();
    let joined = thread::spawn(move || failed.value_or_throw()).join();
    let Err(payload) = joined else {
        panic!("expected the worker to rethrow");
    };
    assert!(Fault::from_panic(payload).is_same_token(&token));
}

#[rstest]
fn catch_result_records_the_caller_as_origin() {
    let failed = Attempt::<usize>::catch_result(|| write_block(1));
    assert_eq!(failed.fault().downcast_ref::<StorageError>(), Some(&StorageError::DiskFull(1)));
    assert!(failed.fault().location().file().ends_with("attempt_tests.rs"));
}

#[rstest]
fn catch_result_keeps_successes_and_panics() {
    assert_eq!(Attempt::catch_result(|| write_block(0)), Attempt::success(512));
    let panicked = Attempt::<usize>::catch_result(|| -> Result<usize, StorageError> {
        panic!("controller reset")
    });
    assert!(panicked.fault().downcast_ref::<PanicError>().is_some());
}
