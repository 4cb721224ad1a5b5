use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/relay-api");
        cmd.env("RELAY_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // The server refuses to start without a signing secret
        if std::env::var("JWT_SECRET").is_err() {
            cmd.env("JWT_SECRET", "relay-integration-test-secret");
        }

        // Inherit environment so the server can see DATABASE_URL from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    // Consider server ready on any non-404 response
                    if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// True when the server reports a reachable database. Suites that need
/// real persistence call this and return early when Postgres is absent,
/// so the strict assertions stay strict where they can run.
#[allow(dead_code)]
pub async fn db_available(server: &TestServer) -> bool {
    let client = reqwest::Client::new();
    match client.get(format!("{}/health", server.base_url)).send().await {
        Ok(resp) => resp.status() == StatusCode::OK,
        Err(_) => false,
    }
}

/// A client that keeps cookies, so the session token rides along the
/// way a browser would carry it.
#[allow(dead_code)]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("failed to build client")
}

static EMAIL_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique email per call so suites never collide on the UNIQUE constraint.
#[allow(dead_code)]
pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}-{}@relay.test", tag, std::process::id(), nanos, n)
}

/// Password accepted by the policy; handy default for suites.
#[allow(dead_code)]
pub const GOOD_PASSWORD: &str = "Abcdef1!";

/// Sign up a fresh account and log it in, returning a cookie-carrying
/// client plus the account's email.
#[allow(dead_code)]
pub async fn signup_and_login(server: &TestServer, tag: &str) -> Result<(reqwest::Client, String)> {
    let email = unique_email(tag);

    let res = reqwest::Client::new()
        .post(format!("{}/users/signup", server.base_url))
        .json(&serde_json::json!({ "email": email, "password": GOOD_PASSWORD, "name": "Ann" }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "signup failed: {}",
        res.status()
    );

    let client = session_client();
    let res = client
        .post(format!("{}/users/login", server.base_url))
        .json(&serde_json::json!({ "email": email, "password": GOOD_PASSWORD }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    Ok((client, email))
}
