use std::collections::HashSet;
use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;

use unobot::{Bot, Card, Color, GameBuilder, GameError, GameStateView, HumanBot, RandomBot};

fn view_with_hand(hand: Vec<Card>) -> Result<GameStateView, GameError> {
    let game = GameBuilder::new(2)?.build()?;
    let mut view = game.state_view(0)?;
    view.hand = hand;
    Ok(view)
}

fn human(input: &'static str) -> HumanBot<Cursor<&'static str>, Vec<u8>> {
    HumanBot::with_io("Tester", Cursor::new(input), Vec::new())
}

fn transcript(bot: &HumanBot<Cursor<&'static str>, Vec<u8>>) -> String {
    String::from_utf8_lossy(bot.output()).to_string()
}

#[test]
fn human_reprompts_until_a_playable_card() -> Result<(), GameError> {
    let view = view_with_hand(vec![
        Card::number(Color::Red, 1),
        Card::number(Color::Blue, 2),
        Card::WILD,
    ])?;
    let mut bot = human("9\nabc\n2\n0\n1\n");
    let choice = bot.choose_card(&view, &[0, 2])?;
    assert_eq!(choice, 0);

    let text = transcript(&bot);
    assert!(text.contains("Tester's Turn"));
    assert!(text.contains("1) Red 1"));
    assert!(text.contains("3) Wild"));
    assert_eq!(text.matches("You can't play that card").count(), 1);
    assert_eq!(text.matches("Enter the number shown next to a card").count(), 3);
    Ok(())
}

#[test]
fn human_can_quit_from_card_prompt() -> Result<(), GameError> {
    let view = view_with_hand(vec![Card::WILD])?;
    let mut bot = human("q\n");
    assert!(matches!(bot.choose_card(&view, &[0]), Err(GameError::Aborted)));
    Ok(())
}

#[test]
fn human_color_menu_is_one_based() -> Result<(), GameError> {
    let view = view_with_hand(vec![])?;
    let mut bot = human("5\nred\n3\n");
    assert_eq!(bot.choose_color(&view)?, Color::Green);
    let text = transcript(&bot);
    assert!(text.contains("1) Red\n2) Yellow\n3) Green\n4) Blue"));
    Ok(())
}

#[test]
fn human_uno_declaration_is_case_insensitive() -> Result<(), GameError> {
    let view = view_with_hand(vec![Card::WILD])?;
    assert!(human("  UnO \n").declare_uno(&view)?);
    assert!(human("uno\n").declare_uno(&view)?);
    assert!(!human("uno!\n").declare_uno(&view)?);
    assert!(!human("\n").declare_uno(&view)?);
    Ok(())
}

#[test]
fn human_closed_input_surfaces_error() -> Result<(), GameError> {
    let view = view_with_hand(vec![Card::WILD])?;
    assert!(matches!(
        human("").declare_uno(&view),
        Err(GameError::InputClosed)
    ));
    Ok(())
}

#[test]
fn random_bot_only_picks_legal_cards() -> Result<(), GameError> {
    let view = view_with_hand(vec![Card::WILD; 6])?;
    let mut bot = RandomBot::new(StdRng::seed_from_u64(3));
    let legal = [1, 3, 5];
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let choice = bot.choose_card(&view, &legal)?;
        assert!(legal.contains(&choice));
        seen.insert(choice);
    }
    assert_eq!(seen.len(), legal.len());
    Ok(())
}

#[test]
fn random_bot_names_every_color() -> Result<(), GameError> {
    let view = view_with_hand(vec![])?;
    let mut bot = RandomBot::new(StdRng::seed_from_u64(11));
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(bot.choose_color(&view)?);
    }
    assert_eq!(seen.len(), Color::ALL.len());
    Ok(())
}

#[test]
fn random_bot_declaration_follows_its_rng() -> Result<(), GameError> {
    let view = view_with_hand(vec![Card::WILD])?;
    let mut always = RandomBot::new(StepRng::new(0, 0));
    assert!(always.declare_uno(&view)?);
    let mut never = RandomBot::new(StepRng::new(u64::MAX, 0));
    assert!(!never.declare_uno(&view)?);

    let mut seeded = RandomBot::new(StdRng::seed_from_u64(5));
    let declared = (0..1_000)
        .filter_map(|_| seeded.declare_uno(&view).ok())
        .filter(|declared| *declared)
        .count();
    assert!((700..=900).contains(&declared), "declared {declared} of 1000");
    Ok(())
}
