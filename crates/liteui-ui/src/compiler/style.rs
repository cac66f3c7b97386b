use liteui_engine::paint::Color;

use crate::theme::Theme;

// Fixed alpha steps for derived colors.
const FAINT: u8 = 0x1a;
const SOFT: u8 = 0x20;
const MUTED: u8 = 0x40;
const MEDIUM: u8 = 0x60;
const HALF: u8 = 0x80;

/// Build the stylesheet for `theme`.
///
/// Every color below is a theme token or `token.with_alpha(..)`; there are no
/// literal colors, so swapping a token repaints every rule that uses it.
pub fn stylesheet(theme: &Theme) -> String {
    let bg = theme.background;
    let text = theme.text;
    let primary = theme.primary;
    let secondary = theme.secondary;
    let accent = theme.accent;

    let a = |c: Color, alpha: u8| c.with_alpha(alpha);

    format!(
        r#"
* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
    transition: all 0.3s ease;
}}

body {{
    font-family: 'Segoe UI', Arial, sans-serif;
    padding: 20px;
    background-color: {bg};
    color: {text};
    line-height: 1.6;
}}

.ui-element {{
    margin: 15px 0;
    opacity: 0;
    animation: fadeIn 0.5s forwards;
}}

@keyframes fadeIn {{
    from {{ opacity: 0; transform: translateY(10px); }}
    to {{ opacity: 1; transform: translateY(0); }}
}}

.tab-nav {{
    display: flex;
    margin-bottom: 25px;
    border-bottom: 2px solid {secondary_muted};
    padding: 0 10px;
    gap: 10px;
}}

.tab-button {{
    padding: 12px 24px;
    border: none;
    background-color: transparent;
    color: {text};
    cursor: pointer;
    font-weight: 500;
    position: relative;
    overflow: hidden;
    box-shadow: none;
}}

.tab-button:before {{
    content: '';
    position: absolute;
    bottom: 0;
    left: 50%;
    transform: translateX(-50%);
    width: 0;
    height: 3px;
    background-color: {primary};
    transition: width 0.3s ease;
}}

.tab-button:hover:before {{
    width: 100%;
}}

.tab-button.active {{
    color: {primary};
}}

.tab-button.active:before {{
    width: 100%;
}}

.tab-content {{
    display: none;
    padding: 25px;
    border-radius: 8px;
    background-color: {bg_half};
    box-shadow: 0 4px 6px {text_faint};
    opacity: 0;
    transform: translateY(10px);
}}

.tab-content.active {{
    display: block;
    animation: slideIn 0.3s forwards;
}}

@keyframes slideIn {{
    to {{
        opacity: 1;
        transform: translateY(0);
    }}
}}

button {{
    padding: 10px 20px;
    cursor: pointer;
    background-color: {primary};
    color: {bg};
    border: none;
    border-radius: 6px;
    font-weight: 500;
    box-shadow: 0 2px 4px {primary_muted};
}}

button:hover {{
    transform: translateY(-2px);
    box-shadow: 0 4px 8px {primary_medium};
}}

button:active {{
    transform: translateY(0);
}}

select {{
    padding: 10px;
    width: 200px;
    border: 2px solid {secondary_muted};
    border-radius: 6px;
    background-color: {bg};
    color: {text};
    cursor: pointer;
}}

select:focus {{
    border-color: {primary};
    outline: none;
}}

input[type="text"] {{
    padding: 10px;
    width: 200px;
    border: 2px solid {secondary_muted};
    border-radius: 6px;
    background-color: {bg};
    color: {text};
}}

input[type="text"]:focus {{
    border-color: {primary};
    outline: none;
    box-shadow: 0 0 0 3px {primary_soft};
}}

input[type="range"] {{
    width: 200px;
    height: 6px;
    -webkit-appearance: none;
    background: {secondary_muted};
    border-radius: 3px;
    outline: none;
}}

input[type="range"]::-webkit-slider-thumb {{
    -webkit-appearance: none;
    width: 18px;
    height: 18px;
    background: {accent};
    border-radius: 50%;
    cursor: pointer;
    box-shadow: 0 2px 4px {text_faint};
    transition: all 0.2s ease;
}}

input[type="range"]::-webkit-slider-thumb:hover {{
    transform: scale(1.1);
}}
"#,
        secondary_muted = a(secondary, MUTED),
        bg_half = a(bg, HALF),
        text_faint = a(text, FAINT),
        primary_muted = a(primary, MUTED),
        primary_medium = a(primary, MEDIUM),
        primary_soft = a(primary, SOFT),
    )
}
