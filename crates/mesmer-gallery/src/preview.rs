//! Read-only HTML preview for an artwork package
//!
//! The preview embeds the animated SVG with selection, context-menu and
//! save-shortcut suppression plus a watermark, so a package can be
//! shared for review without handing out a clean copy of the markup.

use mesmer_core::Artwork;

const PREVIEW_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__NAME__ - Preview</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            -webkit-user-select: none;
            -moz-user-select: none;
            -ms-user-select: none;
            user-select: none;
        }

        body {
            background: #ffffff;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            position: relative;
        }

        .container {
            width: 90vmin;
            height: 90vmin;
            max-width: 800px;
            max-height: 800px;
            position: relative;
            background: #fff;
            border-radius: 20px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.1);
            overflow: hidden;
        }

        svg {
            width: 100%;
            height: 100%;
            pointer-events: none;
        }

        .watermark {
            position: absolute;
            bottom: 20px;
            right: 20px;
            background: rgba(0,0,0,0.8);
            color: white;
            padding: 8px 16px;
            border-radius: 8px;
            font-family: Arial, sans-serif;
            font-size: 14px;
            pointer-events: none;
        }

        .info {
            position: absolute;
            top: 20px;
            left: 20px;
            background: rgba(255,255,255,0.95);
            padding: 15px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            font-family: Arial, sans-serif;
        }

        .info h3 {
            margin: 0 0 5px 0;
            color: #333;
            font-size: 18px;
        }

        .info p {
            margin: 0;
            color: #666;
            font-size: 14px;
        }

        .rarity {
            display: inline-block;
            padding: 3px 10px;
            border-radius: 15px;
            font-size: 12px;
            font-weight: bold;
            margin-top: 5px;
        }

        .rarity.common { background: #e5e7eb; color: #374151; }
        .rarity.rare { background: #dbeafe; color: #1e40af; }
        .rarity.epic { background: #e9d5ff; color: #6b21a8; }
        .rarity.legendary { background: #fed7aa; color: #92400e; }
    </style>
</head>
<body oncontextmenu="return false;">
    <div class="container">
        __ARTWORK__
        <div class="watermark">PREVIEW</div>
        <div class="info">
            <h3>__NAME__</h3>
            <p>__STYLE__</p>
            <span class="rarity __RARITY_CLASS__">__RARITY__</span>
        </div>
    </div>

    <script>
        document.addEventListener('contextmenu', e => e.preventDefault());
        document.addEventListener('selectstart', e => e.preventDefault());
        document.addEventListener('dragstart', e => e.preventDefault());

        document.addEventListener('keydown', e => {
            if ((e.ctrlKey || e.metaKey) && (e.key === 's' || e.key === 'S')) {
                e.preventDefault();
                return false;
            }
        });
    </script>
</body>
</html>"#;

/// Render the protected preview document for one artwork
pub fn render_preview(artwork: &Artwork) -> String {
    PREVIEW_TEMPLATE
        .replace("__ARTWORK__", &artwork.svg)
        .replace("__NAME__", &artwork.name)
        .replace("__STYLE__", &artwork.style)
        .replace("__RARITY_CLASS__", &artwork.rarity.to_string().to_lowercase())
        .replace("__RARITY__", &artwork.rarity.to_string())
}
