use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use word_graph_core::{
    find_bridge_words, generate_new_text, random_walk, shortest_path, shortest_paths_from,
    AutoContinue, VertexId, WalkOutcome, WordGraph,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let word_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: word-graph-bench [mode] [word_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all corpora and benchmark each (default)");
        println!("  zipf     Zipf-distributed vocabulary (natural-text-like hubs)");
        println!("  uniform  Uniform random vocabulary (flat degree distribution)");
        println!("  cycle    One long repeated sentence (heavy weights, few edges)");
        println!();
        println!("Default word_count: 1000000");
        return;
    }

    println!("word-graph-bench");
    println!("================");
    println!();

    let corpora: Vec<(&str, fn(usize) -> Vec<String>)> = match mode {
        "zipf" => vec![("Zipf vocabulary", gen_zipf)],
        "uniform" => vec![("Uniform vocabulary", gen_uniform)],
        "cycle" => vec![("Repeated sentence", gen_cycle)],
        "all" => vec![
            ("Zipf vocabulary", gen_zipf as fn(usize) -> Vec<String>),
            ("Uniform vocabulary", gen_uniform),
            ("Repeated sentence", gen_cycle),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in corpora {
        run_benchmark(name, generator, word_count);
    }
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(usize) -> Vec<String>, word_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} words", word_count);

    let t = Instant::now();
    let tokens = generator(word_count);
    let gen_time = ms(t);

    let t = Instant::now();
    let graph = WordGraph::from_tokens(&tokens);
    println!(
        "Generated in {:.1}ms, built in {:.1}ms: {} vertices, {} edges",
        gen_time,
        ms(t),
        graph.vertex_count(),
        graph.edge_count()
    );
    if graph.vertex_count() < 2 {
        println!();
        return;
    }

    // Hub = highest out-degree vertex; far = last inserted vertex
    let hub = graph
        .vertex_ids()
        .max_by_key(|&v| graph.out_degree(v))
        .unwrap_or(0);
    let far = (graph.vertex_count() - 1) as VertexId;
    let (hub_word, far_word) = (graph.word(hub), graph.word(far));

    println!();
    println!("{:>24} {:>12} {:>10}", "query", "result", "time");
    println!("{:->24} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let mut bridges = 0usize;
    for &v in graph.neighbors_out(hub).iter().map(|e| &e.target).take(100) {
        bridges += find_bridge_words(&graph, hub_word, graph.word(v)).len();
    }
    println!("{:>24} {:>12} {:>8.1}ms", "bridges (hub, 100 pairs)", bridges, ms(t));

    let t = Instant::now();
    let path = shortest_path(&graph, hub, far);
    let hops = path.map_or_else(|| "none".to_string(), |p| format!("{} hops", p.hops()));
    println!("{:>24} {:>12} {:>8.1}ms", format!("path {hub_word}→{far_word}"), hops, ms(t));

    let t = Instant::now();
    let all = shortest_paths_from(&graph, hub);
    println!("{:>24} {:>12} {:>8.1}ms", "all paths from hub", all.len(), ms(t));

    let sample = tokens[..tokens.len().min(1_000)].join(" ");
    let mut rng = StdRng::seed_from_u64(42);
    let t = Instant::now();
    let rewritten = generate_new_text(&graph, &sample, &mut rng);
    println!(
        "{:>24} {:>12} {:>8.1}ms",
        "rewrite 1000 words",
        rewritten.text().split(' ').count(),
        ms(t)
    );

    let t = Instant::now();
    let mut steps = 0usize;
    for _ in 0..100 {
        if let WalkOutcome::Finished(r) = random_walk(&graph, &mut rng, &mut AutoContinue) {
            steps += r.path.len();
        }
    }
    println!("{:>24} {:>12} {:>8.1}ms", "100 random walks", steps, ms(t));
    println!();
}

// ---------------------------------------------------------------------------
// Corpora: seeded, deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Lowercase alphabetic name for vocabulary index `i`: a, b, …, z, ba, bb, …
fn word_name(mut i: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (i % 26) as u8);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Zipf-like vocabulary: rank r drawn with probability ∝ 1/r.
///
/// A few words dominate (like "the", "of"), producing hub vertices with
/// large out-degree and a long tail of rare words.
fn gen_zipf(word_count: usize) -> Vec<String> {
    let vocab = (word_count / 20).clamp(2, 50_000);
    let mut rng = StdRng::seed_from_u64(12345);

    // Inverse-CDF sampling over the harmonic weights
    let mut cdf = Vec::with_capacity(vocab);
    let mut total = 0.0;
    for r in 1..=vocab {
        total += 1.0 / r as f64;
        cdf.push(total);
    }
    let names: Vec<String> = (0..vocab).map(word_name).collect();

    (0..word_count)
        .map(|_| {
            let x = rng.random::<f64>() * total;
            let idx = cdf.partition_point(|&c| c < x).min(vocab - 1);
            names[idx].clone()
        })
        .collect()
}

/// Uniform random vocabulary: every word equally likely. Flat degrees,
/// mostly weight-1 edges.
fn gen_uniform(word_count: usize) -> Vec<String> {
    let vocab = (word_count / 10).clamp(2, 100_000);
    let mut rng = StdRng::seed_from_u64(54321);
    let names: Vec<String> = (0..vocab).map(word_name).collect();
    (0..word_count)
        .map(|_| names[rng.random_range(0..vocab)].clone())
        .collect()
}

/// One 12-word sentence repeated: a single cycle whose weights grow with
/// the corpus. Worst case for the repeated-edge walk rule (long cycle).
fn gen_cycle(word_count: usize) -> Vec<String> {
    const SENTENCE: [&str; 12] = [
        "to", "explore", "strange", "new", "worlds", "and", "seek", "out", "life", "beyond",
        "the", "stars",
    ];
    SENTENCE
        .iter()
        .cycle()
        .take(word_count)
        .map(|w| w.to_string())
        .collect()
}
