use criterion::{black_box, criterion_group, criterion_main, Criterion};
use molfp::{
    convert_to_morgan_fingerprint, morgan_fingerprint, parse_smiles, tanimoto_bulk,
    tanimoto_similarity, Fingerprint, MorganConfig,
};

/// Representative flat-notation chains
const NOTATION_SET: &[&str] = &[
    "C-C-O",            // ethanol backbone
    "C-C=O",            // acetaldehyde
    "C=O",              // formaldehyde
    "O=C=O",            // carbon dioxide
    "C-C-C-C-C-C-C-C",  // octane
    "N#C-C",            // acetonitrile
    "C-O-C",            // dimethyl ether
    "C-S-C",            // dimethyl sulfide
    "C-N-C",            // dimethylamine
    "N-C=O",            // formamide
    "C-C#C-C",          // 2-butyne
    "Cl-C-Cl",          // dichloromethane backbone
    "Br-C-C-Br",        // 1,2-dibromoethane backbone
    "C-C-C-C-O",        // butanol backbone
    "O-C-C-O",          // ethylene glycol backbone
    "C-C-C=O",          // propanal
    "S=C=S",            // carbon disulfide
    "C-C-N",            // ethylamine
    "F-C-F",            // difluoromethane backbone
    "C-C-C-C-C-C",      // hexane
];

fn bench_notation_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation_parse");

    // Parse 1k molecules (cycle through the 20 notations)
    let notations_1k: Vec<&str> = NOTATION_SET.iter().copied().cycle().take(1000).collect();

    group.bench_function("1k_mols", |b| {
        b.iter(|| {
            for &notation in black_box(&notations_1k) {
                let _ = parse_smiles(notation);
            }
        })
    });

    group.finish();
}

fn bench_morgan_fp(c: &mut Criterion) {
    let mut group = c.benchmark_group("morgan_fp");

    let mols: Vec<_> = NOTATION_SET
        .iter()
        .filter_map(|s| parse_smiles(s).ok())
        .collect();

    // Fingerprint 1k molecules (cycle through the parsed set)
    let mols_1k: Vec<_> = mols.iter().cycle().take(1000).collect();
    let config = MorganConfig::default();

    group.bench_function("1k_mols_r2_1024", |b| {
        b.iter(|| {
            for mol in black_box(&mols_1k) {
                let _ = morgan_fingerprint(mol, &config);
            }
        })
    });

    group.finish();
}

fn bench_tanimoto(c: &mut Criterion) {
    let mut group = c.benchmark_group("tanimoto");

    let fps: Vec<Fingerprint> = NOTATION_SET
        .iter()
        .filter_map(|s| convert_to_morgan_fingerprint(s).ok())
        .collect();

    // Build 100 query FPs and 1000 target FPs
    let queries: Vec<Fingerprint> = fps.iter().cycle().take(100).cloned().collect();
    let targets: Vec<Fingerprint> = fps.iter().cycle().take(1000).cloned().collect();

    group.bench_function("100x1k_bulk", |b| {
        b.iter(|| {
            for q in black_box(&queries) {
                let _ = tanimoto_bulk(q, black_box(&targets));
            }
        })
    });

    // Single pair
    group.bench_function("single_pair", |b| {
        b.iter(|| tanimoto_similarity(black_box(&fps[0]), black_box(&fps[1])))
    });

    group.finish();
}

criterion_group!(benches, bench_notation_parse, bench_morgan_fp, bench_tanimoto);
criterion_main!(benches);
