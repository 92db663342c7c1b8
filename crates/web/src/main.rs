//! Static preview entry point: renders a role's views to stdout or a directory.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    use bizdesk_web::config::PreviewConfig;

    bizdesk_observability::init();

    let config = PreviewConfig::from_env().context("invalid preview configuration")?;
    tracing::info!(
        role = %config.role,
        output_dir = ?config.output_dir,
        format = config.format.extension(),
        "rendering preview"
    );

    let stdout = std::io::stdout();
    let written = bizdesk_web::preview::run(&config, &mut stdout.lock())?;

    tracing::info!(views = written, "preview complete");
    Ok(())
}

// The browser build starts from `frontend::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
