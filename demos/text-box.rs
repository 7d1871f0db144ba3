use textbox_break::layout::{BreakOptions, Overflow, TextBox, WidthBudget};
use textbox_break::{tokenize_plain, FontSpec, HeuristicMeasurer, Pt, Token, TextStyle};

fn main() {
    let font = FontSpec::new("Helvetica", Pt(16.));

    // a box that narrows towards the bottom, like text set inside a triangle
    let options = BreakOptions::default()
        .width(WidthBudget::shape(|line| Pt(400. - 30. * line as f32)))
        .height(Pt(16. * 1.2 * 8.))
        .overflow(Overflow::Ellipsis);
    let text_box = TextBox::new(options, font);

    let mut tokens = vec![
        Token::text("Lorem").with_style(TextStyle::default().bold()),
        Token::soft_break(),
        Token::space(),
        Token::text("ipsum").with_style(TextStyle::default().italic()),
        Token::soft_break(),
        Token::space(),
    ];
    tokens.extend(tokenize_plain(&lipsum::lipsum(120)));

    let lines = text_box.break_lines(&mut tokens, &HeuristicMeasurer::default());
    for (i, line) in lines.iter().enumerate() {
        println!("{i:>2} [{:>6.1}] {}", line.width().0, line.text());
    }
    if lines.truncated {
        println!("(truncated)");
    }
}
