use huffman_text_coder::huffman::{HuffmanCoding, NodeRef};

fn decode(root: NodeRef, bits: &str) -> String {
    let mut decoded = String::new();
    let mut current = root;
    for bit in bits.chars() {
        if !current.is_leaf() {
            current = if bit == '0' {
                current.left().unwrap()
            } else {
                current.right().unwrap()
            };
        }
        if current.is_leaf() {
            decoded.push(current.symbol().unwrap());
            current = root;
        }
    }
    decoded
}

#[test]
fn test_round_trip_through_public_api() {
    let texts = [
        "",
        "z",
        "zzzzzz",
        "abracadabra",
        "A long line of text, with punctuation; digits 0123456789 and ümlauts.",
    ];
    for text in texts {
        let coding = HuffmanCoding::build(text);
        let encoded = coding.encode(text).expect("Encoding failed");
        let decoded = match coding.tree() {
            Some(tree) => decode(tree.root(), &encoded),
            None => String::new(),
        };
        assert_eq!(decoded, text, "Round trip failed for '{}'", text);
        assert_eq!(
            encoded.len(),
            coding.codes().weighted_length(coding.frequencies()),
            "Encoded length differs from weighted code length"
        );
    }
}

#[test]
fn test_display_order_of_tables() {
    let coding = HuffmanCoding::build("mississippi");
    let counts: Vec<usize> = coding
        .frequencies()
        .sorted_by_count_descending()
        .iter()
        .map(|entry| entry.frequency)
        .collect();
    assert_eq!(counts, vec![4, 4, 2, 1]);
    let lengths: Vec<usize> = coding
        .codes()
        .sorted_by_code_length()
        .iter()
        .map(|entry| entry.length())
        .collect();
    assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));
}
