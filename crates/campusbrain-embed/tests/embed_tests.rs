use campusbrain_embed::{default_embedder, EMBEDDING_DIM};

#[test]
fn fake_embedder_shapes_and_determinism() {
    // Force fake embedder to avoid loading large model
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = default_embedder().expect("embedder");
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), EMBEDDING_DIM, "embedding dim is {EMBEDDING_DIM}");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) {
        assert!((a - b).abs() <= 1e-6);
    }
}

#[test]
fn embed_batch_is_order_preserving_and_one_to_one() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = default_embedder().expect("embedder");
    let texts = vec![
        "operating systems".to_string(),
        "database schemas".to_string(),
        "operating systems".to_string(),
    ];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    assert_eq!(embs.len(), texts.len());
    // Same text in positions 0 and 2 must produce the same vector
    assert_eq!(embs[0], embs[2]);
    assert_ne!(embs[0], embs[1]);
}

#[test]
fn empty_text_returns_defined_vector() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = default_embedder().expect("embedder");
    let v = embedder.embed_one("").expect("empty input must not error");
    assert_eq!(v.len(), EMBEDDING_DIM);
    assert!(v.iter().all(|x| *x == 0.0), "empty text embeds to the zero vector");
}

#[test]
fn embed_one_matches_batch() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = default_embedder().expect("embedder");
    let single = embedder.embed_one("process scheduling").expect("embed_one");
    let batch = embedder
        .embed_batch(&["process scheduling".to_string()])
        .expect("embed_batch");
    assert_eq!(single, batch[0]);
}
