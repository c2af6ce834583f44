use crate::{FAILURE_MARKER, LoginProbe, ProbeResult, SUCCESS_MARKER};

#[tokio::test]
#[ignore = "requires network access to the deployed expense backend"]
async fn test_integration_probe_default_backend() -> ProbeResult<()> {
    let probe = LoginProbe::builder().build()?;

    let mut out = Vec::new();
    probe.run(&mut out).await?;

    let output = String::from_utf8_lossy(&out);
    println!("{}", output);
    assert!(output.contains("Status: "));
    assert!(output.contains(SUCCESS_MARKER) || output.contains(FAILURE_MARKER));
    Ok(())
}

#[tokio::test]
#[ignore = "requires network access to the deployed expense backend"]
async fn test_integration_login_invalid_credentials() -> ProbeResult<()> {
    let probe = LoginProbe::builder()
        .credentials("invalid_user", "invalid_pass")
        .build()?;

    let response = probe.login().await?;
    assert!(!response.is_success());
    Ok(())
}
