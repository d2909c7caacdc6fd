use colormix_model::{Channel, Color};

/// Per-channel arithmetic mean of `colors`, or `None` for an empty input.
///
/// Each channel is summed in ascending order, so any permutation of the same
/// colors yields a bit-identical result. The mean is clamped into
/// `[0.0, 1.0]` because rounding can nudge it just past 1.0.
pub fn mix_colors<'a, I>(colors: I) -> Option<Color>
where
    I: IntoIterator<Item = &'a Color>,
{
    let colors: Vec<&Color> = colors.into_iter().collect();
    if colors.is_empty() {
        return None;
    }

    let count = colors.len() as f64;
    let mean = |channel: Channel| {
        let mut values: Vec<f64> =
            colors.iter().map(|color| color.channel(channel)).collect();
        values.sort_by(f64::total_cmp);
        (values.iter().sum::<f64>() / count).clamp(0.0, 1.0)
    };

    Some(Color {
        red: mean(Channel::Red),
        green: mean(Channel::Green),
        blue: mean(Channel::Blue),
        alpha: mean(Channel::Alpha),
    })
}
