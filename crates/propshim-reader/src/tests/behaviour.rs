//! Behaviour-driven tests for reading upgraded properties.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use propshim_model::{
    Diagnostic, InterceptionRequest, JvmType, MethodDeclaration, UpgradeDirective,
};

use crate::{ProjectContext, PropertyUpgradeReader};

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn items(&self) -> Vec<&str> {
        self.0.split(',').map(str::trim).collect()
    }
}

#[derive(Default)]
struct TestWorld {
    project: Option<String>,
    method: Option<MethodDeclaration>,
    directive: UpgradeDirective,
    result: Option<Result<Vec<InterceptionRequest>, Diagnostic>>,
}

impl TestWorld {
    fn requests(&self) -> &[InterceptionRequest] {
        self.result
            .as_ref()
            .expect("method should be read")
            .as_deref()
            .expect("method should succeed")
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

#[given("a project named {name}")]
fn given_project(world: &mut TestWorld, name: QuotedString) {
    world.project = Some(name.as_str().to_owned());
}

#[given("no project name")]
fn given_no_project(world: &mut TestWorld) {
    world.project = None;
}

#[given("a marked getter {name} on {owner} returning {declared}")]
fn given_marked_getter(
    world: &mut TestWorld,
    name: QuotedString,
    owner: QuotedString,
    declared: QuotedString,
) {
    world.method = Some(MethodDeclaration::new(
        owner.as_str().parse().expect("owner type"),
        name.as_str(),
        declared.as_str().parse().expect("declared type"),
    ));
}

#[given("the marker sets fluentSetter to {flag}")]
fn given_fluent_setter(world: &mut TestWorld, flag: bool) {
    world.directive = world.directive.clone().with_fluent_setter(flag);
}

#[given("the marker sets originalType to {original}")]
fn given_original_type(world: &mut TestWorld, original: QuotedString) {
    let original_type: JvmType = original.as_str().parse().expect("original type");
    world.directive = world.directive.clone().with_original_type(original_type);
}

#[when("the method is read")]
fn when_read(world: &mut TestWorld) {
    let context = ProjectContext::from_option(world.project.as_deref());
    let reader = PropertyUpgradeReader::new(context);
    let method = world.method.as_ref().expect("method should be declared");
    world.result = Some(reader.read_method(method, &world.directive));
}

#[then("{count} requests are produced")]
fn then_request_count(world: &mut TestWorld, count: usize) {
    assert_eq!(world.requests().len(), count);
}

#[then("the intercepted calls are {names}")]
fn then_call_names(world: &mut TestWorld, names: QuotedString) {
    let actual: Vec<&str> = world
        .requests()
        .iter()
        .map(|request| request.call().name())
        .collect();
    assert_eq!(actual, names.items());
}

#[then("the adapter methods are {names}")]
fn then_adapter_names(world: &mut TestWorld, names: QuotedString) {
    let actual: Vec<&str> = world
        .requests()
        .iter()
        .map(|request| request.implementation().name())
        .collect();
    assert_eq!(actual, names.items());
}

#[then("the setter returns {return_type}")]
fn then_setter_returns(world: &mut TestWorld, return_type: QuotedString) {
    let setter = world.requests().last().expect("setter request");
    assert_eq!(setter.call().return_type().to_string(), return_type.as_str());
}

#[then("the method fails with {code}")]
fn then_fails_with(world: &mut TestWorld, code: QuotedString) {
    let diagnostic = world
        .result
        .as_ref()
        .expect("method should be read")
        .as_ref()
        .expect_err("method should fail");
    assert_eq!(diagnostic.code().to_string(), code.as_str());
}

#[scenario(
    path = "tests/features/propshim_reader.feature",
    name = "A simple wrapped property keeps its old getter and setter"
)]
fn simple_property(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/propshim_reader.feature",
    name = "Boolean properties were read through an is-getter"
)]
fn boolean_property(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/propshim_reader.feature",
    name = "Fluent setters return their owner"
)]
fn fluent_setter(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/propshim_reader.feature",
    name = "An explicit original type unlocks unknown wrappers"
)]
fn explicit_original_type(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/propshim_reader.feature",
    name = "Marked methods fail without a project name"
)]
fn missing_project(world: TestWorld) {
    let _ = world;
}
