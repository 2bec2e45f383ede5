//! Shared helpers for the hook annotation tests.

use std::cell::RefCell;
use std::io::Write;
use std::sync::{Arc, Mutex};

use mount_chown::{ChownExecutor, ChownRequest};
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

/// Annotations section of a container `config.json` with three requests, one
/// of them incomplete, next to annotations owned by other tools.
pub const CONFIG_ANNOTATIONS: &str = r#"{
    "io.kubernetes.cri.container-type": "container",
    "org.opencontainers.image.ref.name": "ubuntu",
    "com.launchplatform.oci-hooks.mount-chown.data.mount-point": "/var/lib/data",
    "com.launchplatform.oci-hooks.mount-chown.data.owner": "1000:1000",
    "com.launchplatform.oci-hooks.mount-chown.data.policy": "recursive",
    "com.launchplatform.oci-hooks.mount-chown.cache.mount-point": "/var/cache/app",
    "com.launchplatform.oci-hooks.mount-chown.cache.owner": "33",
    "com.launchplatform.oci-hooks.mount-chown.cache.policy": "root-only",
    "com.launchplatform.oci-hooks.mount-chown.logs.mount-point": "/var/log/app",
    "com.launchplatform.oci-hooks.mount-chown.logs.policy": "recursive"
}"#;

/// Executor that records what it was asked to do.
#[derive(Default)]
pub struct RecordingExecutor {
    pub calls: RefCell<Vec<ChownRequest>>,
    pub fail_on: Vec<String>,
}

impl ChownExecutor for RecordingExecutor {
    type Error = std::io::Error;

    fn chown(&self, request: &ChownRequest) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(request.clone());
        if self.fail_on.contains(&request.mount_point) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "operation not permitted",
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
struct TestWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for TestWriter {
    type Writer = TestWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a WARN-level subscriber and return what it logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(TestWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();

    let dispatch = Dispatch::new(subscriber);
    let out = tracing::dispatcher::with_default(&dispatch, f);
    let logs = String::from_utf8(buffer.lock().expect("log buffer").clone()).expect("utf8 logs");
    (out, logs)
}
