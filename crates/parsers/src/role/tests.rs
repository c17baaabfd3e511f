use std::sync::atomic::{AtomicUsize, Ordering};

use herald_directory::RoleDirectory;
use herald_invocation::{AckQueue, Interaction, QueuedInteraction};
use herald_primitives::InteractionId;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

const GUILD: GuildId = GuildId(1);

/// Role directory that counts every lookup.
#[derive(Default)]
struct CountingDirectory {
	inner: RoleDirectory,
	calls: AtomicUsize,
}

impl CountingDirectory {
	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl DirectoryLookup for CountingDirectory {
	fn find_by_id(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.inner.find_by_id(guild, role)
	}

	fn find_by_name_exact(&self, guild: GuildId, name: &str, case_insensitive: bool) -> Vec<Arc<GuildRole>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.inner.find_by_name_exact(guild, name, case_insensitive)
	}
}

fn directory() -> Arc<CountingDirectory> {
	let inner = RoleDirectory::from_roles([
		GuildRole::new(GUILD, RoleId(123), "Admins"),
		GuildRole::new(GUILD, RoleId(456), "mods"),
		GuildRole::new(GUILD, RoleId(457), "Mods"),
		// Named like another role's id.
		GuildRole::new(GUILD, RoleId(789), "123"),
		GuildRole::new(GuildId(2), RoleId(999), "Elsewhere"),
	]);
	Arc::new(CountingDirectory {
		inner,
		calls: AtomicUsize::new(0),
	})
}

fn parser(modes: ParseModes, directory: &Arc<CountingDirectory>) -> RoleParser {
	RoleParser::new(modes, directory.clone()).expect("non-empty modes")
}

fn guild_ctx() -> SessionContext {
	let (tx, _rx) = AckQueue::channel();
	SessionContext::new(Arc::new(QueuedInteraction::in_guild(InteractionId(1), GUILD, tx)))
}

fn direct_ctx() -> SessionContext {
	let (tx, _rx) = AckQueue::channel();
	SessionContext::new(Arc::new(QueuedInteraction::direct(InteractionId(1), tx)))
}

#[test]
fn mention_resolves_and_consumes_one_token() {
	let dir = directory();
	let mut input = InputCursor::new("<@&123> trailing");

	let role = parser(ParseModes::MENTION, &dir).resolve(&guild_ctx(), &mut input).unwrap();

	assert_eq!(role.id, RoleId(123));
	assert_eq!(input.consumed(), 1);
	assert_eq!(input.peek_token(), "trailing");
}

#[test]
fn mention_with_unknown_id_is_not_found() {
	let dir = directory();
	let mut input = InputCursor::new("<@&999>");

	let error = parser(ParseModes::MENTION, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NotFound("<@&999>".into()));
	assert_eq!(input.consumed(), 0);
}

#[test]
fn bare_id_is_not_a_mention() {
	let dir = directory();
	let mut input = InputCursor::new("123");

	let error = parser(ParseModes::MENTION, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::MalformedMention("123".into()));
	assert_eq!(dir.calls(), 0);
}

#[rstest]
#[case::empty_interior("<@&>")]
#[case::missing_suffix("<@&123")]
#[case::missing_prefix("@&123>")]
#[case::user_mention("<@123>")]
#[case::channel_mention("<#123>")]
fn mention_grammar_is_exact(#[case] token: &str) {
	let dir = directory();
	let mut input = InputCursor::new(token);

	let error = parser(ParseModes::MENTION, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::MalformedMention(token.into()));
}

#[test]
fn non_numeric_mention_interior_is_not_found() {
	let dir = directory();
	let mut input = InputCursor::new("<@&abc>");

	let error = parser(ParseModes::MENTION, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NotFound("<@&abc>".into()));
}

#[test]
fn id_takes_priority_over_name() {
	let dir = directory();
	let mut input = InputCursor::new("123");

	let role = parser(ParseModes::ID | ParseModes::NAME, &dir)
		.resolve(&guild_ctx(), &mut input)
		.unwrap();

	assert_eq!(role.id, RoleId(123));
	assert_eq!(role.name, "Admins");
}

#[test]
fn name_is_tried_after_id_misses() {
	let dir = directory();
	let mut input = InputCursor::new("ADMINS");

	let role = parser(ParseModes::ID | ParseModes::NAME, &dir)
		.resolve(&guild_ctx(), &mut input)
		.unwrap();

	assert_eq!(role.id, RoleId(123));
	assert_eq!(input.consumed(), 1);
}

#[test]
fn name_only_ignores_ids() {
	let dir = directory();
	let mut input = InputCursor::new("123");

	let role = parser(ParseModes::NAME, &dir).resolve(&guild_ctx(), &mut input).unwrap();

	assert_eq!(role.id, RoleId(789));
}

#[test]
fn colliding_names_are_ambiguous() {
	let dir = directory();
	let mut input = InputCursor::new("Mods");

	let error = parser(ParseModes::NAME, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::AmbiguousMatch("Mods".into()));
	assert_eq!(input.consumed(), 0);
	assert_eq!(input.peek_token(), "Mods");
}

#[test]
fn roles_of_other_guilds_are_invisible() {
	let dir = directory();
	let mut input = InputCursor::new("999");

	let error = parser(ParseModes::all(), &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NotFound("999".into()));
}

#[rstest]
#[case::mention(ParseModes::MENTION)]
#[case::id(ParseModes::ID)]
#[case::name(ParseModes::NAME)]
#[case::all(ParseModes::all())]
fn empty_input_fails_before_lookup(#[case] modes: ParseModes, #[values("", "   ")] raw: &str) {
	let dir = directory();
	let mut input = InputCursor::new(raw);

	let error = parser(modes, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NoInput);
	assert_eq!(dir.calls(), 0);
}

#[test]
fn no_input_is_reported_before_missing_context() {
	let dir = directory();
	let mut input = InputCursor::new("");

	let error = parser(ParseModes::all(), &dir)
		.resolve(&SessionContext::detached(), &mut input)
		.unwrap_err();

	assert_eq!(error, ResolutionError::NoInput);
}

#[test]
fn missing_interaction_is_a_wiring_error() {
	let dir = directory();
	let mut input = InputCursor::new("Admins");

	let error = parser(ParseModes::all(), &dir)
		.resolve(&SessionContext::detached(), &mut input)
		.unwrap_err();

	assert_eq!(error, ResolutionError::MissingContext("interaction"));
	assert_eq!(error.category(), crate::ErrorCategory::Wiring);
	assert_eq!(dir.calls(), 0);
}

#[rstest]
#[case::mention(ParseModes::MENTION, "<@&123>")]
#[case::id(ParseModes::ID, "123")]
#[case::name(ParseModes::NAME, "Admins")]
#[case::all(ParseModes::all(), "Admins")]
fn outside_guild_is_rejected(#[case] modes: ParseModes, #[case] raw: &str) {
	let dir = directory();
	let mut input = InputCursor::new(raw);

	let error = parser(modes, &dir).resolve(&direct_ctx(), &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NotInGuild);
	assert_eq!(dir.calls(), 0);
	assert_eq!(input.consumed(), 0);
}

/// Claims to come from a guild without carrying a guild id.
#[derive(Debug)]
struct GuildlessInteraction;

impl Interaction for GuildlessInteraction {
	fn id(&self) -> InteractionId {
		InteractionId(5)
	}

	fn guild_id(&self) -> Option<GuildId> {
		None
	}

	fn is_from_guild(&self) -> bool {
		true
	}

	fn defer_reply(&self, _ephemeral: bool) {}
}

#[test]
fn guild_flag_without_guild_id_is_rejected() {
	let dir = directory();
	let ctx = SessionContext::new(Arc::new(GuildlessInteraction));
	let mut input = InputCursor::new("Admins");

	let error = parser(ParseModes::all(), &dir).resolve(&ctx, &mut input).unwrap_err();

	assert_eq!(error, ResolutionError::NotInGuild);
	assert_eq!(dir.calls(), 0);
	assert_eq!(input.consumed(), 0);
}

#[test]
fn evaluation_order_ignores_how_modes_were_collected() {
	let dir = directory();
	let modes: ParseModes = [ParseMode::Name, ParseMode::Id].into_iter().collect();
	let mut input = InputCursor::new("123");

	let role = parser(modes, &dir).resolve(&guild_ctx(), &mut input).unwrap();

	assert_eq!(role.id, RoleId(123));
	assert_eq!(dir.calls(), 1);
}

#[rstest]
#[case::mention_only(ParseModes::MENTION, "nope", ResolutionError::MalformedMention("nope".into()))]
#[case::mention_then_id(ParseModes::MENTION | ParseModes::ID, "nope", ResolutionError::NotFound("nope".into()))]
#[case::mention_then_name(ParseModes::MENTION | ParseModes::NAME, "Mods", ResolutionError::AmbiguousMatch("Mods".into()))]
#[case::id_then_name(ParseModes::ID | ParseModes::NAME, "nope", ResolutionError::NotFound("nope".into()))]
#[case::mention_masked_by_id(ParseModes::MENTION | ParseModes::ID, "<@&999>", ResolutionError::NotFound("<@&999>".into()))]
fn last_enabled_mode_failure_is_reported(#[case] modes: ParseModes, #[case] raw: &str, #[case] expected: ResolutionError) {
	let dir = directory();
	let mut input = InputCursor::new(raw);

	let error = parser(modes, &dir).resolve(&guild_ctx(), &mut input).unwrap_err();

	assert_eq!(error, expected);
}

#[test]
fn empty_mode_set_fails_at_construction() {
	let dir = directory();

	assert_eq!(
		RoleParser::new(ParseModes::empty(), dir.clone()).unwrap_err(),
		ArgumentBuildError::NoParseModes
	);
	assert_eq!(
		RoleArgument::builder("role", dir.clone()).modes(ParseModes::empty()).build().unwrap_err(),
		ArgumentBuildError::NoParseModes
	);
	assert_eq!(dir.calls(), 0);
}

#[test]
fn builder_defaults_to_all_modes() {
	let argument = RoleArgument::builder("target", directory())
		.description("Role to ping")
		.build()
		.unwrap();

	assert_eq!(argument.name(), "target");
	assert_eq!(argument.description(), "Role to ping");
	assert_eq!(argument.modes(), ParseModes::all());
	assert_eq!(RoleArgument::of("target", directory()).modes(), ParseModes::all());
}

#[test]
fn argument_parser_trait_delegates() {
	let argument = RoleArgument::builder("target", directory())
		.modes(ParseModes::MENTION)
		.build()
		.unwrap();
	let mut input = InputCursor::new("<@&456>");

	let role = argument.parser().parse(&guild_ctx(), &mut input).unwrap();

	assert_eq!(role.name, "mods");
	assert!(argument.parser().is_context_free());
}

#[test]
fn repeated_resolution_is_stable() {
	let dir = directory();
	let parser = parser(ParseModes::all(), &dir);
	let ctx = guild_ctx();
	let input = InputCursor::new("Mods");

	let first = parser.resolve(&ctx, &mut input.clone());
	let second = parser.resolve(&ctx, &mut input.clone());

	assert_eq!(first, second);
	assert_eq!(ctx.reply_policy(), None);
	assert_eq!(dir.inner.role_count(GUILD), 4);
}

proptest! {
	#[test]
	fn consumes_exactly_when_resolved(token in "[^\\s]{0,10}", bits in 1u8..8) {
		let dir = directory();
		let parser = parser(ParseModes::from_bits_truncate(bits), &dir);
		let ctx = guild_ctx();
		let before = InputCursor::new(&token);
		let mut input = before;

		let first = parser.resolve(&ctx, &mut input);
		match &first {
			Ok(_) => prop_assert_eq!(input.consumed(), 1),
			Err(_) => prop_assert_eq!(input, before),
		}

		let mut again = before;
		prop_assert_eq!(parser.resolve(&ctx, &mut again), first);
	}
}
