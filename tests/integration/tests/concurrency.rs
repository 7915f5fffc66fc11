//! A configured transformer is shared across threads without locking.

use std::sync::Arc;
use std::thread;

use mdredact_core::Transformer;
use pretty_assertions::assert_eq;

const SOURCE: &str = "Shared [a link](http://x.com) and ![an image](http://y.com/i.png)";

#[test]
fn concurrent_transforms_agree_with_serial_ones() {
    let transformer = Arc::new(Transformer::new());
    let expected_redacted = transformer.source_to_redacted(SOURCE).unwrap();
    let expected_restored = transformer
        .source_and_redacted_to_markdown(SOURCE, &expected_redacted)
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let transformer = Arc::clone(&transformer);
            thread::spawn(move || {
                let redacted = transformer.source_to_redacted(SOURCE).unwrap();
                let restored = transformer
                    .source_and_redacted_to_markdown(SOURCE, &redacted)
                    .unwrap();
                (redacted, restored)
            })
        })
        .collect();

    for handle in handles {
        let (redacted, restored) = handle.join().unwrap();
        assert_eq!(redacted, expected_redacted);
        assert_eq!(restored, expected_restored);
    }
}
