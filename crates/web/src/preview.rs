//! Static preview: render every view of a role to HTML or JSON.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::config::{OutputFormat, PreviewConfig};
use crate::navigation::{self, Role, View};

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub view: View,
    pub body: String,
}

/// Render every view the role can open, in navigation order.
pub fn render_all(role: Role, format: OutputFormat) -> anyhow::Result<Vec<RenderedView>> {
    role.views()
        .iter()
        .map(|view| -> anyhow::Result<RenderedView> {
            let page = navigation::render_page(role, *view)?;
            let body = match format {
                OutputFormat::Html => wrap_document(view.title(), &page.to_html()),
                OutputFormat::Json => serde_json::to_string_pretty(&page)
                    .with_context(|| format!("failed to serialize {}", view.slug()))?,
            };
            Ok(RenderedView { view: *view, body })
        })
        .collect()
}

fn wrap_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} | {}</title></head>\n<body>{}</body>\n</html>\n",
        crate::markup::escape_html(title),
        navigation::APP_NAME,
        body
    )
}

/// Where a view ends up when writing to a directory.
pub fn output_path(config: &PreviewConfig, view: View) -> Option<PathBuf> {
    config.output_dir.as_ref().map(|dir| {
        dir.join(config.role.as_str())
            .join(format!("{}.{}", view.slug(), config.format.extension()))
    })
}

/// Render and write every view; returns how many were written.
///
/// With no output directory, pages are written to `out` one after another.
pub fn run(config: &PreviewConfig, out: &mut impl Write) -> anyhow::Result<usize> {
    let rendered = render_all(config.role, config.format)
        .with_context(|| format!("failed to render views for role {}", config.role))?;

    for page in &rendered {
        match output_path(config, page.view) {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                fs::write(&path, &page.body)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(view = page.view.slug(), path = %path.display(), "wrote view");
            }
            None => {
                out.write_all(page.body.as_bytes())
                    .context("failed to write to stdout")?;
                tracing::debug!(view = page.view.slug(), "printed view");
            }
        }
    }

    Ok(rendered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Panel;

    #[test]
    fn renders_each_role_view_once() {
        for role in Role::ALL {
            let pages = render_all(role, OutputFormat::Html).unwrap();
            let views: Vec<View> = pages.iter().map(|p| p.view).collect();
            assert_eq!(views, role.views());
            assert!(pages.iter().all(|p| p.body.starts_with("<!DOCTYPE html>")));
        }
    }

    #[test]
    fn json_output_is_the_page_tree() {
        let pages = render_all(Role::Clerk, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&pages[0].body).unwrap();
        assert_eq!(value["kind"], "element");
        assert_eq!(value["tag"], "div");
    }

    #[test]
    fn stdout_mode_writes_all_pages() {
        let config = PreviewConfig::default();
        let mut buf = Vec::new();
        let written = run(&config, &mut buf).unwrap();
        assert_eq!(written, Role::Sales.views().len());

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(Panel::Orders.placeholder()));
        assert!(text.contains("Out of Stock"));
    }

    #[test]
    fn directory_mode_writes_one_file_per_view() {
        let dir = std::env::temp_dir().join(format!("bizdesk-preview-{}", std::process::id()));
        let config = PreviewConfig {
            role: Role::Clerk,
            output_dir: Some(dir.clone()),
            format: OutputFormat::Html,
        };

        let mut buf = Vec::new();
        let written = run(&config, &mut buf).unwrap();
        assert_eq!(written, Role::Clerk.views().len());
        assert!(buf.is_empty());

        let stock = fs::read_to_string(dir.join("clerk").join("stock.html")).unwrap();
        assert!(stock.contains("FW-001"));

        let _ = fs::remove_dir_all(&dir);
    }
}
