//! QR code rendering for connection links

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::QrCode;
use yew::prelude::*;

/// Render `value` as an inline SVG QR code at least `size` pixels square.
pub fn render_svg(value: &str, size: u32) -> Result<String, QrError> {
    let code = QrCode::new(value.as_bytes())?;
    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    // Drop the XML prolog, it has no meaning inside an HTML document
    Ok(match image.find("<svg") {
        Some(start) => image[start..].to_string(),
        None => image,
    })
}

#[derive(Properties, PartialEq)]
pub struct ConnectionQrProps {
    pub value: AttrValue,
    pub size: u32,
}

#[function_component(ConnectionQr)]
pub fn connection_qr(props: &ConnectionQrProps) -> Html {
    let image = use_memo((props.value.clone(), props.size), |(value, size)| {
        render_svg(value, *size)
    });

    match &*image {
        Ok(svg) => html! {
            <div class="shrink-0" title={props.value.clone()}>
                { Html::from_html_unchecked(AttrValue::from(svg.clone())) }
            </div>
        },
        Err(err) => {
            tracing::warn!(error = %err, "cannot encode connection link as QR code");
            html! {
                <div class="text-xs text-gray-500 dark:text-gray-400">{"QR code unavailable"}</div>
            }
        }
    }
}
