use login_probe::{LoginProbe, ProbeResult, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ProbeResult<()> {
    let subscriber = telemetry::get_subscriber(telemetry::DEFAULT_LOG_FILTER, std::io::stderr);
    telemetry::init_subscriber(subscriber);

    let probe = LoginProbe::builder().build()?;
    if let Err(e) = probe.run(std::io::stdout()).await {
        tracing::error!(error = %e, "login probe aborted");
        return Err(e);
    }

    Ok(())
}
