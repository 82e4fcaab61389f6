//! Scripted example routines. Each builds a fixed set of bricks and returns
//! the derived statistics as a report; rendering lives in `format`.

use legobrick_core::{partition_compatible, total_studs, Brick, BrickFactory, ColorTally, CountedBrick};
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Example {
    Collection,
    Compatibility,
    Counter,
    Colors,
    Experimental,
    Factory,
}

impl Example {
    pub const ALL: [Example; 6] = [
        Example::Collection,
        Example::Compatibility,
        Example::Counter,
        Example::Colors,
        Example::Experimental,
        Example::Factory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Example::Collection => "Example 1: Building a Brick Collection",
            Example::Compatibility => "Example 2: Finding Compatible Bricks",
            Example::Counter => "Example 3: The Brick Counter",
            Example::Colors => "Example 4: Brick Color Analysis",
            Example::Experimental => "Example 5: The Experimental Brick Lab",
            Example::Factory => "Example 6: The Brick Factory",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "example", rename_all = "snake_case")]
pub enum Report {
    Collection(CollectionReport),
    Compatibility(CompatibilityReport),
    Counter(CounterReport),
    Colors(ColorReport),
    Experimental(ExperimentalReport),
    Factory(FactoryReport),
}

impl Report {
    pub fn example(&self) -> Example {
        match self {
            Report::Collection(_) => Example::Collection,
            Report::Compatibility(_) => Example::Compatibility,
            Report::Counter(_) => Example::Counter,
            Report::Colors(_) => Example::Colors,
            Report::Experimental(_) => Example::Experimental,
            Report::Factory(_) => Example::Factory,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CollectionReport {
    pub bricks: Vec<Brick>,
    pub total_studs: i64,
}

#[derive(Debug, Serialize)]
pub struct Verdict {
    pub brick: Brick,
    pub can_connect: bool,
}

#[derive(Debug, Serialize)]
pub struct CompatibilityReport {
    pub target: Brick,
    pub verdicts: Vec<Verdict>,
    pub compatible: usize,
    pub incompatible: usize,
}

#[derive(Debug, Serialize)]
pub struct CounterReport {
    pub bricks: Vec<CountedBrick>,
    pub total_created: u64,
}

#[derive(Debug, Serialize)]
pub struct ColorCount {
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ColorReport {
    /// Sorted by color.
    pub distribution: Vec<ColorCount>,
    pub most_common: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Specimen {
    pub label: &'static str,
    pub brick: Brick,
}

#[derive(Debug, Serialize)]
pub struct ExperimentalReport {
    pub specimens: Vec<Specimen>,
}

#[derive(Debug, Serialize)]
pub struct ConnectionTest {
    pub from: Brick,
    pub to: Brick,
    pub connects: bool,
}

#[derive(Debug, Serialize)]
pub struct FactoryReport {
    pub inventory: Vec<Brick>,
    pub connection_tests: Vec<ConnectionTest>,
}

pub fn run(example: Example, config: &DemoConfig) -> Report {
    tracing::debug!(?example, "running example");
    match example {
        Example::Collection => Report::Collection(brick_collection(&config.collection.bricks)),
        Example::Compatibility => Report::Compatibility(compatible_bricks()),
        Example::Counter => Report::Counter(brick_counter()),
        Example::Colors => Report::Colors(color_analysis()),
        Example::Experimental => Report::Experimental(experimental_bricks()),
        Example::Factory => Report::Factory(brick_factory()),
    }
}

pub fn run_all(examples: &[Example], config: &DemoConfig) -> Vec<Report> {
    examples.iter().map(|e| run(*e, config)).collect()
}

pub fn brick_collection(bricks: &[Brick]) -> CollectionReport {
    CollectionReport {
        bricks: bricks.to_vec(),
        total_studs: total_studs(bricks),
    }
}

pub fn compatible_bricks() -> CompatibilityReport {
    let target = Brick::new("red", 2, 4);
    let candidates = vec![
        Brick::new("blue", 4, 2),
        Brick::new("green", 2, 2),
        Brick::new("yellow", 1, 8),
        Brick::new("black", 4, 4),
    ];

    let (compatible, incompatible) = {
        let (yes, no) = partition_compatible(&target, &candidates);
        (yes.len(), no.len())
    };

    let verdicts = candidates
        .into_iter()
        .map(|brick| Verdict {
            can_connect: target.can_connect_to(&brick),
            brick,
        })
        .collect();

    CompatibilityReport {
        target,
        verdicts,
        compatible,
        incompatible,
    }
}

/// Uses its own factory, so numbering restarts at #1 on every run.
pub fn brick_counter() -> CounterReport {
    let mut factory = BrickFactory::new();
    let bricks = vec![
        factory.make("red", 2, 4),
        factory.make("blue", 2, 2),
        factory.make("green", 1, 8),
        factory.make("yellow", 4, 2),
    ];
    CounterReport {
        bricks,
        total_created: factory.total_created(),
    }
}

pub fn color_analysis() -> ColorReport {
    let bricks = [
        Brick::new("red", 2, 4),
        Brick::new("red", 2, 2),
        Brick::new("blue", 4, 2),
        Brick::new("blue", 2, 4),
        Brick::new("blue", 1, 1),
        Brick::new("green", 2, 2),
        Brick::new("yellow", 2, 4),
    ];
    let tally = ColorTally::from_bricks(&bricks);
    ColorReport {
        distribution: tally
            .sorted()
            .into_iter()
            .map(|(color, count)| ColorCount { color: color.to_string(), count })
            .collect(),
        most_common: tally.most_common().map(|(color, _)| color.to_string()),
    }
}

pub fn experimental_bricks() -> ExperimentalReport {
    ExperimentalReport {
        specimens: vec![
            Specimen { label: "Tiny", brick: Brick::new("transparent", 1, 1) },
            Specimen { label: "Long", brick: Brick::new("gray", 1, 16) },
            Specimen { label: "Chunky", brick: Brick::new("brown", 8, 8) },
            Specimen { label: "Weird", brick: Brick::new("neon-octarine", 3, 7) },
        ],
    }
}

pub fn brick_factory() -> FactoryReport {
    let red = Brick::new("red", 2, 4);
    let blue = Brick::new("blue", 4, 2);
    let green = Brick::new("green", 1, 8);
    let yellow = Brick::new("yellow", 2, 2);

    let test = |from: &Brick, to: &Brick| ConnectionTest {
        from: from.clone(),
        to: to.clone(),
        connects: from.can_connect_to(to),
    };
    let connection_tests = vec![test(&red, &blue), test(&red, &yellow), test(&green, &yellow)];

    FactoryReport {
        inventory: vec![red, blue, green, yellow],
        connection_tests,
    }
}
