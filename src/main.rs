//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` locally. Pass a port as the first argument (default
//! 8000); set `VIZ_TUNNEL=1` to also expose it through ngrok.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::{bail, Context};
    use std::process::{Command, Stdio};
    use std::{env, thread, time::Duration};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port: u16 = match env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("bad port {arg:?}"))?,
        None => 8000,
    };

    log::info!("building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => bail!(
            "wasm-pack exited with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
        ),
        Err(_) => {
            log::warn!("wasm-pack not found in PATH; the site may serve stale artifacts");
        }
    }

    log::info!("serving static/ at http://127.0.0.1:{port} …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to start http server (is python3 installed?)")?;

    if env::var("VIZ_TUNNEL").is_ok_and(|v| v == "1") {
        match Command::new("ngrok")
            .args(["http", &port.to_string()])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
        {
            Ok(_) => log::info!("ngrok tunnel starting …"),
            Err(_) => log::warn!("ngrok not found; install it to expose the site"),
        }
    }

    loop {
        if let Some(status) = server.try_wait()? {
            bail!("http server exited with {status}");
        }
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
