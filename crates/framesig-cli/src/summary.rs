use console::Style;
use framesig_core::pipeline::config::{EntropyConfig, SpectralConfig};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_entropy_summary(config: &EntropyConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Framesig Entropy"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{} file(s)",
        s.label.apply_to("Inputs"),
        s.value.apply_to(config.inputs.len())
    );
    for input in &config.inputs {
        println!("    {}", s.path.apply_to(input.display()));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Charts"),
        s.path.apply_to(config.output_dir.display())
    );
    print_frame_rate(&s, config.frame_rate);
    println!();
}

pub fn print_spectrum_summary(config: &SpectralConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Framesig Spectrum"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    print_frame_rate(&s, config.frame_rate);
    println!();
}

fn print_frame_rate(s: &Styles, frame_rate: Option<f64>) {
    match frame_rate {
        Some(fps) => println!(
            "  {:<14}{}",
            s.label.apply_to("Frame rate"),
            s.value.apply_to(format!("{fps} fps"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Frame rate"),
            s.value.apply_to("from source")
        ),
    }
}
