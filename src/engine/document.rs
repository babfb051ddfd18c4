//! Self-contained interactive HTML export
//!
//! Emits one document with the artwork inlined as a data URI, the card
//! styling inlined as CSS and the pointer-tilt behavior inlined as a
//! script. No external references of any kind.

use crate::domain::CardRecord;
use crate::view::TILT_DEGREES_PER_PERCENT;

/// Render the interactive document for one card.
///
/// `image_data_uri` must already be a `data:` URI so the file stands alone.
pub fn render(card: &CardRecord, image_data_uri: &str) -> String {
    let name = escape_html(&card.name);
    let description = escape_html(&card.description);
    let card_number = escape_html(&card.card_number);
    let set_info = escape_html(&card.set_info);
    let rarity_label = escape_html(card.rarity.label());
    let rarity_color = card.rarity.color_hex();
    let shine_stops = css_color_list(card.color_palette.overlay_stops());
    let shine_opacity = card.effect_intensity() as f32 / 100.0;
    let tilt = TILT_DEGREES_PER_PERCENT;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Holographic Card</title>
    <style>
        body {{
            margin: 0;
            padding: 20px;
            background: #0f172a;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            font-family: Arial, sans-serif;
        }}
        .holo-card {{
            width: 330px;
            height: 460px;
            background: linear-gradient(135deg, #1a1a2e, #16213e, #0f172a);
            border-radius: 12px;
            position: relative;
            cursor: none;
            transform-style: preserve-3d;
            transition: transform 0.1s ease;
        }}
        .holo-card:hover {{
            transform: perspective(1000px) rotateX(var(--rotate-x, 0deg)) rotateY(var(--rotate-y, 0deg)) scale(1.02);
        }}
        .card-content {{
            position: relative;
            z-index: 10;
            padding: 20px;
            height: 100%;
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            color: white;
        }}
        .rarity {{
            color: {rarity_color};
            font-size: 12px;
            letter-spacing: 1px;
        }}
        .card-image {{
            width: 100%;
            height: 60%;
            background-image: url('{image_data_uri}');
            background-size: cover;
            background-position: center;
            border-radius: 8px;
            margin: 20px 0;
        }}
        .holo-shine {{
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: linear-gradient(45deg, {shine_stops});
            opacity: 0;
            transition: opacity 0.3s ease;
            mix-blend-mode: screen;
            border-radius: 12px;
        }}
        .holo-card:hover .holo-shine {{
            opacity: {shine_opacity};
        }}
    </style>
</head>
<body>
    <div class="holo-card" id="holoCard">
        <div class="holo-shine"></div>
        <div class="card-content">
            <div>
                <h3>{name}</h3>
                <p class="rarity">{rarity_label}</p>
            </div>
            <div class="card-image"></div>
            <div>
                <p>{description}</p>
                <div style="display: flex; justify-content: space-between; font-size: 12px;">
                    <span>#{card_number}</span>
                    <span>{set_info}</span>
                </div>
            </div>
        </div>
    </div>

    <script>
        const card = document.getElementById('holoCard');
        card.addEventListener('mousemove', (e) => {{
            const rect = card.getBoundingClientRect();
            const x = ((e.clientX - rect.left) / rect.width) * 100;
            const y = ((e.clientY - rect.top) / rect.height) * 100;

            const rotateX = (y - 50) * {tilt};
            const rotateY = (x - 50) * -{tilt};

            card.style.setProperty('--rotate-x', rotateX + 'deg');
            card.style.setProperty('--rotate-y', rotateY + 'deg');
        }});

        card.addEventListener('mouseleave', () => {{
            card.style.setProperty('--rotate-x', '0deg');
            card.style.setProperty('--rotate-y', '0deg');
        }});
    </script>
</body>
</html>
"#
    )
}

fn css_color_list(stops: [[u8; 3]; 4]) -> String {
    stops
        .iter()
        .map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
