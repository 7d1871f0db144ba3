use textbox_break::layout::{linebreak, BreakOptions, Overflow, TextBox, WidthBudget};
use textbox_break::{
    tokenize_plain, FontSpec, HeuristicMeasurer, MonospaceMeasurer, Pt, TextStyle, Token,
    TokenKind,
};

/// 10pt monospace where every character is 10 wide and every line 10 tall
fn font() -> FontSpec {
    FontSpec::new("mono", Pt(10.)).with_line_height(1.)
}

fn mono() -> MonospaceMeasurer {
    HeuristicMeasurer::monospace(1.)
}

fn texts(lines: &textbox_break::layout::Lines) -> Vec<String> {
    lines.iter().map(|l| l.text()).collect()
}

#[test]
fn two_words_share_a_line() {
    let mut tokens = vec![
        Token::text("Hello"),
        Token::soft_break(),
        Token::space(),
        Token::text("world"),
    ];
    let options = BreakOptions::default()
        .width(Pt(1000.))
        .overflow(Overflow::Ellipsis);
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(lines.len(), 1);
    assert!(!lines.truncated);
    // the unused break is dropped, the space is kept
    let kinds: Vec<TokenKind> = lines[0].tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Text; 3]);
    assert_eq!(lines[0].text(), "Hello world");
    assert_eq!(lines[0].width(), Pt(110.));
    assert_eq!(lines.font, font());
}

#[test]
fn overlong_word_overflows_unsplit() {
    let mut tokens = vec![Token::text("Supercalifragilistic")];
    let options = BreakOptions::default().width(Pt(50.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["Supercalifragilistic"]);
    assert!(lines[0].width() > Pt(50.));
    assert!(!lines.truncated);
}

#[test]
fn single_line_box_truncates_with_ellipsis() {
    let mut tokens = tokenize_plain("aaaa bbbb cccc dddd eeee ffff");
    let options = BreakOptions::default()
        .width(Pt(95.))
        .height(Pt(15.))
        .overflow(Overflow::Ellipsis);
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(lines.len(), 1);
    assert!(lines.truncated);
    assert_eq!(lines[0].text(), "aaaa bbb…");
    let marker = lines[0].tokens.last().unwrap();
    assert_eq!(marker.value, "…");
    assert!(lines[0].width() <= Pt(95.));
}

#[test]
fn truncation_without_marker_just_clips() {
    let mut tokens = tokenize_plain("aaaa bbbb cccc dddd eeee ffff");
    let options = BreakOptions::default().width(Pt(95.)).height(Pt(15.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert!(lines.truncated);
    assert_eq!(texts(&lines), vec!["aaaa bbbb"]);
}

#[test]
fn custom_marker() {
    let mut tokens = tokenize_plain("aaaa bbbb cccc dddd");
    let options = BreakOptions::default()
        .width(Pt(1000.))
        .height(Pt(10.))
        .overflow(Overflow::Marker(" [more]".into()));
    let mut tokens_with_break = tokens.clone();
    tokens_with_break.insert(4, Token::line_break());
    let lines = linebreak(&mut tokens_with_break, &options, &font(), &mono());
    assert_eq!(texts(&lines), vec!["aaaa bbbb [more]"]);

    // everything fits, so no marker
    let lines = linebreak(&mut tokens, &options, &font(), &mono());
    assert_eq!(texts(&lines), vec!["aaaa bbbb cccc dddd"]);
}

#[test]
fn overflowing_hyphen_loses_to_earlier_break() {
    // "aaa cccc" fits, but "aaa cccc-" does not
    let mut tokens = tokenize_plain("aaa cccc\u{00AD}dd");
    let options = BreakOptions::default().width(Pt(85.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["aaa", "ccccdd"]);
    assert!(lines
        .iter()
        .flat_map(|l| l.tokens.iter())
        .all(|t| t.kind != TokenKind::SoftHyphen));
}

#[test]
fn hyphen_used_when_it_fits() {
    let mut tokens = tokenize_plain("aaa cc\u{00AD}dd");
    let options = BreakOptions::default().width(Pt(70.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["aaa cc-", "dd"]);
    let dash = lines[0].tokens.last().unwrap();
    assert_eq!(dash.kind, TokenKind::SoftHyphen);
    assert_eq!(dash.width, Pt(10.));
}

#[test]
fn wrapped_lines_stay_within_the_width() {
    let mut tokens = tokenize_plain("aaa bbb ccc");
    let options = BreakOptions::default().width(Pt(65.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["aaa", "bbb", "ccc"]);
    assert!(lines.iter().all(|l| l.width() <= Pt(65.)));
}

#[test]
fn hard_breaks_survive_for_justification() {
    let mut tokens = tokenize_plain("first line\nsecond line");
    let options = BreakOptions::default().width(Pt(1000.));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["first line", "second line"]);
    assert!(lines[0].ends_in_hard_break());
    assert!(!lines[1].ends_in_hard_break());
}

#[test]
fn hard_break_counts_against_height() {
    let mut tokens = tokenize_plain("a\nb\nc");
    let options = BreakOptions::default()
        .width(Pt(1000.))
        .height(Pt(20.))
        .overflow(Overflow::Ellipsis);
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(lines.len(), 2);
    assert!(lines.truncated);
    // the hard break on the last line is followed by the marker
    assert_eq!(lines[1].text(), "b…");
}

#[test]
fn superscript_is_smaller() {
    let mut tokens = vec![
        Token::text("E=mc"),
        Token::text("2").with_style(TextStyle::default().superscript()),
    ];
    let lines = linebreak(&mut tokens, &BreakOptions::default(), &font(), &mono());

    let sup = &lines[0].tokens[1];
    assert_eq!(sup.width, Pt(7.));
    let sup_font = sup.font.as_ref().unwrap();
    assert_eq!(sup_font.size, Pt(7.));
    assert!(sup_font.baseline > 0.);
}

#[test]
fn shaped_box_narrows() {
    let mut tokens = tokenize_plain("aa bb cc dd ee ff");
    let options =
        BreakOptions::default().width(WidthBudget::shape(|line| Pt(60. - 20. * line as f32)));
    let lines = linebreak(&mut tokens, &options, &font(), &mono());

    assert_eq!(texts(&lines), vec!["aa bb", "cc", "dd", "ee", "ff"]);
}

#[test]
fn empty_input_gives_no_lines() {
    let options = BreakOptions::default().overflow(Overflow::Ellipsis);
    let lines = linebreak(&mut [], &options, &font(), &mono());
    assert!(lines.is_empty());
    assert!(!lines.truncated);
    assert_eq!(lines.height(), Pt(0.));
}

#[test]
fn zero_sized_box_gives_no_lines() {
    let mut tokens = tokenize_plain("hidden");
    let options = BreakOptions::default()
        .width(Pt(0.))
        .height(Pt(0.))
        .overflow(Overflow::Ellipsis);
    let lines = linebreak(&mut tokens, &options, &font(), &mono());
    assert!(lines.is_empty());
}

#[test]
fn relayout_of_annotated_tokens_is_identical() {
    let text_box = TextBox::new(
        BreakOptions::default()
            .width(Pt(120.))
            .height(Pt(40.))
            .overflow(Overflow::Ellipsis),
        font(),
    );
    let mut tokens = tokenize_plain(&lipsum::lipsum(40));
    let first = text_box.break_lines(&mut tokens, &HeuristicMeasurer::default());
    let second = text_box.break_lines(&mut tokens, &HeuristicMeasurer::default());
    assert_eq!(first, second);
}
