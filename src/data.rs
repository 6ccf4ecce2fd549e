// src/data.rs

use crate::model::{Problem, WeekPlan};

/// Versión del catálogo embebido. Se guarda junto al progreso; si al
/// cargar no coincide, el almacén ejecuta la migración por título.
pub const CATALOG_VERSION: &str = "3";

/// Carga el catálogo semilla desde el YAML embebido
pub fn seed_problems() -> Vec<Problem> {
    let file_content = include_str!("data/problems.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo YAML de problemas")
}

/// Tabla topic → patrones válidos. Es la fuente de verdad para la
/// validación del alta y para los selectores de filtro.
pub const TOPIC_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Arrays & Strings",
        &[
            "Sliding Window",
            "Two Pointers",
            "Prefix Sum",
            "Hash Map",
            "Stack",
            "Intervals",
            "Matrix",
        ],
    ),
    (
        "Recursion & Backtracking",
        &[
            "Subsets",
            "Permutations",
            "Combinations",
            "Decision Tree",
            "Pruning",
            "Divide & Conquer",
        ],
    ),
    (
        "Binary Search",
        &[
            "Boundary Search",
            "Search on Answer",
            "Rotated Array",
            "Two Arrays",
        ],
    ),
    (
        "Greedy",
        &[
            "Sorting",
            "Intervals",
            "Exchange Argument",
            "Two Pointers Greedy",
        ],
    ),
    ("Heaps", &["Top-K", "Two Heaps", "Merge K", "Scheduling"]),
    (
        "Trees",
        &[
            "DFS Traversal",
            "BFS Traversal",
            "BST",
            "Tree DP",
            "Serialization",
            "Trie",
            "Lowest Common Ancestor",
        ],
    ),
    (
        "Graphs",
        &[
            "Grid",
            "BFS",
            "DFS",
            "Union-Find",
            "Multi-source BFS",
            "Implicit Graph",
            "Shortest Path",
            "Topological Sort",
        ],
    ),
    (
        "Dynamic Programming",
        &[
            "1D DP",
            "2D Grid DP",
            "Knapsack",
            "State Machine",
            "Subsequence",
            "String DP",
            "Interval DP",
            "Bitmask",
        ],
    ),
    (
        "Design",
        &["Cache", "Composite Structure", "Randomized", "Iterator", "Stream"],
    ),
];

pub fn topics() -> Vec<&'static str> {
    TOPIC_PATTERNS.iter().map(|(topic, _)| *topic).collect()
}

pub fn patterns_for_topic(topic: &str) -> Option<&'static [&'static str]> {
    TOPIC_PATTERNS
        .iter()
        .find(|(t, _)| *t == topic)
        .map(|(_, patterns)| *patterns)
}

/// Todos los patrones, en orden de tabla y sin repetidos ("Intervals"
/// aparece bajo dos temas).
pub fn all_patterns() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for (_, patterns) in TOPIC_PATTERNS {
        for p in *patterns {
            if !out.contains(p) {
                out.push(p);
            }
        }
    }
    out
}

// Plan de 16 semanas pensado para ~20 h/semana.
// Total: 270 problemas en 16 semanas ≈ 17 problemas/semana.
pub const EXECUTION_ORDER: &[WeekPlan] = &[
    WeekPlan {
        week: 1,
        focus: "Arrays & Sliding Window",
        patterns: "Sliding Window, Two Pointers",
        problem_ids: "P1–P16",
        problem_count: 16,
        hours_estimate: "~18 hrs",
        resolve_ids: "—",
        outcome: "Window invariants, pointer manipulation",
    },
    WeekPlan {
        week: 2,
        focus: "Arrays & Prefix",
        patterns: "Prefix Sum, Difference Arrays, State Machines",
        problem_ids: "P17–P32",
        problem_count: 16,
        hours_estimate: "~18 hrs",
        resolve_ids: "P1–P8",
        outcome: "Preprocessing, deterministic logic",
    },
    WeekPlan {
        week: 3,
        focus: "Recursion & Backtracking I",
        patterns: "Decision Trees, Subsets, Permutations",
        problem_ids: "P33–P50",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P9–P16",
        outcome: "Recursion tree thinking",
    },
    WeekPlan {
        week: 4,
        focus: "Recursion & Binary Search",
        patterns: "Pruning, Search on Answer",
        problem_ids: "P51–P68",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P17–P24",
        outcome: "Search space control",
    },
    WeekPlan {
        week: 5,
        focus: "Binary Search & Greedy I",
        patterns: "Boundaries, Greedy Proofs",
        problem_ids: "P69–P86",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P25–P32",
        outcome: "Monotonic reasoning, correctness",
    },
    WeekPlan {
        week: 6,
        focus: "Greedy & Heaps",
        patterns: "Heap-based Greedy, Greedy Failures",
        problem_ids: "P87–P104",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P33–P40",
        outcome: "Heap patterns, when greedy fails",
    },
    WeekPlan {
        week: 7,
        focus: "Trees I",
        patterns: "Traversals, Tree DP Basics",
        problem_ids: "P105–P120",
        problem_count: 16,
        hours_estimate: "~18 hrs",
        resolve_ids: "P41–P50",
        outcome: "Tree traversal comfort",
    },
    WeekPlan {
        week: 8,
        focus: "Trees II & Trie",
        patterns: "Re-rooting, BST Logic, Trie",
        problem_ids: "P121–P136",
        problem_count: 16,
        hours_estimate: "~18 hrs",
        resolve_ids: "P51–P60",
        outcome: "Advanced tree patterns",
    },
    WeekPlan {
        week: 9,
        focus: "Graphs I",
        patterns: "BFS/DFS, Union Find, Island Problems",
        problem_ids: "P137–P154",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P61–P70",
        outcome: "Graph traversal fundamentals",
    },
    WeekPlan {
        week: 10,
        focus: "Graphs II",
        patterns: "Implicit Graphs, Multi-source BFS, Dijkstra",
        problem_ids: "P155–P172",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P71–P80",
        outcome: "State graphs, shortest paths",
    },
    WeekPlan {
        week: 11,
        focus: "Graphs III & DP Intro",
        patterns: "Topological Sort, 1D DP",
        problem_ids: "P173–P190",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P81–P90",
        outcome: "DAG problems, DP states",
    },
    WeekPlan {
        week: 12,
        focus: "Dynamic Programming I",
        patterns: "1D/2D DP, Grid DP",
        problem_ids: "P191–P208",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P91–P100",
        outcome: "2D state transitions",
    },
    WeekPlan {
        week: 13,
        focus: "Dynamic Programming II",
        patterns: "Subsequence DP, Bitmask DP",
        problem_ids: "P209–P226",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P101–P110",
        outcome: "Advanced state representations",
    },
    WeekPlan {
        week: 14,
        focus: "DP III & Design",
        patterns: "Interval DP, Tree DP, Cache Design",
        problem_ids: "P227–P244",
        problem_count: 18,
        hours_estimate: "~20 hrs",
        resolve_ids: "P111–P120",
        outcome: "Interval thinking, API design",
    },
    WeekPlan {
        week: 15,
        focus: "Design & Advanced",
        patterns: "Composite DS, Advanced Patterns",
        problem_ids: "P245–P270",
        problem_count: 26,
        hours_estimate: "~20 hrs",
        resolve_ids: "P121–P150",
        outcome: "Complex data structures",
    },
    WeekPlan {
        week: 16,
        focus: "Review & Mocks",
        patterns: "All Patterns, Interview Simulation",
        problem_ids: "—",
        problem_count: 0,
        hours_estimate: "~20 hrs",
        resolve_ids: "Weak areas + Mock contests",
        outcome: "Interview readiness, calm under pressure",
    },
];

pub const WORKBOOK_TIPS: &[&str] = &[
    "20 hrs/week breakdown: ~12 hrs new problems, ~5 hrs re-solving, ~3 hrs review/notes",
    "A problem is DONE only if: Solved + Re-solved after 7 days + Can explain without code",
    "Spend max 30 min attempting before checking solution, then re-solve next day",
    "Track your weak patterns in Universal Notes for targeted review",
    "Week 16 is crucial: do timed mock contests to simulate interview pressure",
    "Quality > Quantity: Understanding 1 problem deeply beats rushing through 5",
];
