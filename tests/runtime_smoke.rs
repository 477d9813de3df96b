#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts hnview::app::run in the background with HNVIEW_TEST_HEADLESS=1.
// - Points the API at a closed local port so the corpus fetch fails fast.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use hnview::config::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var(hnview::app::HEADLESS_ENV, "1");
    }

    let settings = Settings {
        api_base: "http://127.0.0.1:9/v0".into(),
        concurrency: 2,
        request_timeout_secs: Some(1),
        ..Settings::default()
    };
    let handle = tokio::spawn(async move { hnview::app::run(settings).await });

    // Long enough for the failed fetch to be delivered to the loop.
    tokio::time::sleep(Duration::from_millis(300)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
