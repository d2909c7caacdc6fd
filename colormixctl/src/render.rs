use std::io::{self, Write};

use colormix_core::{ColorRow, MixerScreen};

/// Plain-text rendering of the screen:
///
/// ```text
/// # Add color | RU
/// = Result: #800080FF
/// 0: #FF0000FF (#FF0000FF)
/// 1: sky (#0000FFFF)
/// ```
pub fn write_screen<W: Write>(
    out: &mut W,
    screen: &MixerScreen,
) -> io::Result<()> {
    writeln!(
        out,
        "# {} | {}",
        screen.add_button_title(),
        screen.language_button_title()
    )?;

    let mut index = 0;
    for row in screen.rows() {
        if row.is_result {
            writeln!(out, "= {}", row.text)?;
        } else {
            writeln!(out, "{index}: {}", describe(&row))?;
            index += 1;
        }
    }
    Ok(())
}

fn describe(row: &ColorRow) -> String {
    match row.color {
        Some(color) => format!("{} ({})", row.text, color.to_hex()),
        None => row.text.clone(),
    }
}
