//! End-to-end tests against concrete scenarios and quantified invariants of the wire format,
//! exercised through real `#[derive(ZmemLayout)]` output rather than hand-written byte arithmetic.

use std::collections::{BTreeMap, BTreeSet};

use zmem::{FixedStr, Optional, ReadMode};
use zmem_test_fixtures::{
    composite::{Composite, Label},
    entity::Entity,
    geometry::{Point, Vec3},
    inventory::{Catalog, Inventory},
    settings::{Settings, Wrapper},
    shape::{Circle, Color, Rect, Shape},
    swarm::Swarm,
};

fn le_u64(v: u64) -> [u8; 8] {
    v.to_le_bytes()
}

fn le_f32(v: f32) -> [u8; 4] {
    v.to_le_bytes()
}

/// A fixed 2-float struct has no size header and no trailing padding (8 is already
/// a multiple of 8).
#[test]
fn fixed_point_has_no_header_and_no_padding() {
    let point = Point { x: 1.0, y: 2.0 };
    let bytes = zmem::write_fixed(&point).unwrap();
    assert_eq!(bytes, vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40]);

    let preallocated_len = zmem::size_fixed(&point) as usize;
    let mut buf = vec![0u8; preallocated_len];
    zmem::write_fixed_preallocated(&point, &mut buf).unwrap();
    assert_eq!(buf, bytes);

    let back: Point = zmem::read_fixed(&bytes).unwrap();
    assert_eq!(back, point);
}

/// A variable struct with one inline `u64` and one `VectorFixed<f32>` field.
#[test]
fn entity_with_inline_vector_matches_expected_layout() {
    let entity = Entity {
        id: 123,
        weights: vec![1.0, 2.0, 3.0],
    };
    let bytes = zmem::write_variable(&entity).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&le_u64(40)); // content length
    expected.extend_from_slice(&le_u64(123)); // id
    expected.extend_from_slice(&le_u64(24)); // weights offset
    expected.extend_from_slice(&le_u64(3)); // weights count
    expected.extend_from_slice(&le_f32(1.0));
    expected.extend_from_slice(&le_f32(2.0));
    expected.extend_from_slice(&le_f32(3.0));
    expected.extend_from_slice(&[0u8; 4]); // pad content (36 bytes) up to 40

    assert_eq!(bytes, expected);
    assert_eq!(bytes.len() as u64, zmem::size_variable(&entity));

    let back: Entity = zmem::read_variable(&bytes, ReadMode::Permissive).unwrap();
    assert_eq!(back, entity);
}

/// A vector of variable elements is a top-level offset table followed by fully
/// self-contained element encodings, each carrying its own 8-byte size header.
#[test]
fn vector_of_variable_elements_is_self_contained() {
    let e0 = Entity {
        id: 1,
        weights: vec![0.5],
    };
    let e1 = Entity {
        id: 2,
        weights: vec![0.1, 0.2],
    };
    let swarm = Swarm {
        entities: vec![e0.clone(), e1.clone()],
    };

    let swarm_bytes = zmem::write_variable(&swarm).unwrap();
    let e0_bytes = zmem::write_variable(&e0).unwrap();
    let e1_bytes = zmem::write_variable(&e1).unwrap();

    // inline section: one 16-byte ref for `entities`, no other fields -> variable section starts
    // right after it, 8-aligned.
    let variable_section_start = 8 /* header */ + 16;
    let table_start = variable_section_start + 0 /* offset recorded inline is 0 */;
    let data_start = table_start + 3 * 8; // (count + 1) offsets

    let off0 = u64::from_le_bytes(swarm_bytes[table_start..table_start + 8].try_into().unwrap());
    let off1 = u64::from_le_bytes(
        swarm_bytes[table_start + 8..table_start + 16].try_into().unwrap(),
    );
    let off2 = u64::from_le_bytes(
        swarm_bytes[table_start + 16..table_start + 24].try_into().unwrap(),
    );
    assert_eq!(off0, 0);
    assert_eq!(off1, e0_bytes.len() as u64);
    assert_eq!(off2, (e0_bytes.len() + e1_bytes.len()) as u64);

    let tail = &swarm_bytes[data_start..];
    let mut expected_tail = Vec::new();
    expected_tail.extend_from_slice(&e0_bytes);
    expected_tail.extend_from_slice(&e1_bytes);
    assert_eq!(tail[..expected_tail.len()], expected_tail[..]);

    // Self-containment: decoding element 1's own byte sub-range yields the same value as
    // decoding the whole swarm and indexing into it.
    let sub_range = &swarm_bytes[data_start + off1 as usize..data_start + off2 as usize];
    let decoded_alone: Entity = zmem::read_variable(sub_range, ReadMode::Permissive).unwrap();
    assert_eq!(decoded_alone, e1);

    let decoded_swarm: Swarm = zmem::read_variable(&swarm_bytes, ReadMode::Permissive).unwrap();
    assert_eq!(decoded_swarm, swarm);
    assert_eq!(decoded_swarm.entities[1], e1);
}

/// Map entries are sorted ascending by key regardless of insertion order, and two
/// maps built from the same entries in different insertion order produce byte-identical output.
#[test]
fn map_sorted_and_deterministic() {
    let mut in_beta_first = BTreeMap::new();
    in_beta_first.insert(FixedStr::<8>::new("beta"), 10u32);
    in_beta_first.insert(FixedStr::<8>::new("alpha"), 5u32);

    let mut in_alpha_first = BTreeMap::new();
    in_alpha_first.insert(FixedStr::<8>::new("alpha"), 5u32);
    in_alpha_first.insert(FixedStr::<8>::new("beta"), 10u32);

    let a = Inventory { stock: in_beta_first };
    let b = Inventory { stock: in_alpha_first };

    let bytes_a = zmem::write_variable(&a).unwrap();
    let bytes_b = zmem::write_variable(&b).unwrap();
    assert_eq!(bytes_a, bytes_b);

    // "alpha" < "beta": the first entry in the encoded map is "alpha".
    let content_start = 8usize;
    let stock_ref_at = content_start; // single field, cursor 0 aligned to 8
    let offset = u64::from_le_bytes(bytes_a[stock_ref_at..stock_ref_at + 8].try_into().unwrap());
    let map_at = content_start + 16 + offset as usize;
    let count = u64::from_le_bytes(bytes_a[map_at..map_at + 8].try_into().unwrap());
    assert_eq!(count, 2);
    let first_key_bytes = &bytes_a[map_at + 8..map_at + 8 + 8];
    assert_eq!(&first_key_bytes[..5], b"alpha");

    let back: Inventory = zmem::read_variable(&bytes_a, ReadMode::Permissive).unwrap();
    assert_eq!(back, a);
}

/// Two independently constructed absent `Optional<u32>`s, nested inside fixed
/// structs, are byte-identical and entirely zero.
#[test]
fn absent_optional_is_all_zero_and_deterministic() {
    let settings_one = Settings {
        retry_budget: Optional::none(),
    };
    let settings_two = Settings {
        retry_budget: Optional::none(),
    };
    let bytes_one = zmem::write_fixed(&settings_one).unwrap();
    let bytes_two = zmem::write_fixed(&settings_two).unwrap();
    assert_eq!(bytes_one, bytes_two);
    assert!(bytes_one.iter().all(|&b| b == 0));

    let wrapper = Wrapper {
        a: settings_one,
        b: settings_two,
    };
    let wrapper_bytes = zmem::write_fixed(&wrapper).unwrap();
    assert!(wrapper_bytes.iter().all(|&b| b == 0));

    let present = Settings {
        retry_budget: Optional::some(7),
    };
    let present_bytes = zmem::write_fixed(&present).unwrap();
    assert_ne!(present_bytes, bytes_one);
    let back: Settings = zmem::read_fixed(&present_bytes).unwrap();
    assert_eq!(back, present);
}

/// The benchmark composite round-trips on every field, and `view` reports matching
/// scalar sums without materializing the fixed-array or fixed-vector fields into owned
/// containers.
#[test]
fn composite_round_trips_and_view_matches() {
    let composite = Composite {
        ints: [1, -2, 3, -4],
        floats: [1.5, 2.5, 3.5, 4.5],
        doubles: [0.1, 0.2, 0.3, 0.4],
        names: [
            FixedStr::new("sector"),
            FixedStr::new("market"),
            FixedStr::new("trader"),
            FixedStr::new("order"),
            FixedStr::new("fill"),
        ],
        description: "quote: \"tight\", spread: 2bps\nnewline".to_string(),
        positions: vec![
            Vec3 { x: 1.0, y: 2.0, z: 3.0 },
            Vec3 { x: -1.0, y: -2.0, z: -3.0 },
        ],
        tags: vec![
            Label { text: "fast".to_string() },
            Label { text: "slow".to_string() },
        ],
    };

    let bytes = zmem::write_variable(&composite).unwrap();
    assert_eq!(bytes.len() as u64, zmem::size_variable(&composite));

    let decoded: Composite = zmem::read_variable(&bytes, ReadMode::Permissive).unwrap();
    assert_eq!(decoded, composite);

    use zmem_test_fixtures::composite::CompositeView;
    let view = CompositeView::from_bytes(&bytes).unwrap();

    let int_sum: i32 = view.ints().unwrap().iter().sum();
    assert_eq!(int_sum, composite.ints.iter().sum::<i32>());

    let float_sum: f32 = view.floats().unwrap().iter().sum();
    assert_eq!(float_sum, composite.floats.iter().sum::<f32>());

    let position_sum: f32 = view
        .positions()
        .unwrap()
        .iter()
        .map(|v| v.x + v.y + v.z)
        .sum();
    let expected_position_sum: f32 = composite.positions.iter().map(|v| v.x + v.y + v.z).sum();
    assert_eq!(position_sum, expected_position_sum);

    assert_eq!(view.description().unwrap(), composite.description.as_bytes());

    let tag_view = view.tags().unwrap();
    assert_eq!(tag_view.len(), composite.tags.len());
    for i in 0..tag_view.len() {
        assert_eq!(tag_view.element(i).unwrap(), composite.tags[i]);
    }
}

/// Preallocated-mode output is byte-identical to growing-mode output for both fixed and
/// variable values.
#[test]
fn preallocated_matches_growing() {
    let entity = Entity {
        id: 9,
        weights: vec![3.0, 1.0, 4.0, 1.0, 5.0],
    };
    let grown = zmem::write_variable(&entity).unwrap();
    let mut prealloc = vec![0u8; zmem::size_variable(&entity) as usize];
    zmem::write_variable_preallocated(&entity, &mut prealloc).unwrap();
    assert_eq!(grown, prealloc);

    let point = Point { x: -3.25, y: 9.0 };
    let grown_point = zmem::write_fixed(&point).unwrap();
    let mut prealloc_point = vec![0u8; zmem::size_fixed(&point) as usize];
    zmem::write_fixed_preallocated(&point, &mut prealloc_point).unwrap();
    assert_eq!(grown_point, prealloc_point);
}

/// Every variable aggregate's content region, and every inline reference's target, falls on an
/// 8-byte boundary.
#[test]
fn alignment_invariants_hold() {
    let entity = Entity {
        id: 1,
        weights: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
    };
    let bytes = zmem::write_variable(&entity).unwrap();
    let content_len = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
    assert_eq!(content_len % 8, 0);

    let offset = u64::from_le_bytes(bytes[16..24].try_into().unwrap());
    assert_eq!(offset % 8, 0);
}

/// A fieldless enum round-trips as its underlying integer; a fixed tagged union zero-fills the
/// tail past the active variant's payload and round-trips through either arm.
#[test]
fn enums_and_tagged_unions_round_trip() {
    let color = Color::Green;
    let bytes = zmem::write_fixed(&color).unwrap();
    assert_eq!(bytes, vec![1, 0, 0, 0, 0, 0, 0, 0]);
    let back: Color = zmem::read_fixed(&bytes).unwrap();
    assert_eq!(back, color);

    let circle = Shape::Circle(Circle { radius: 2.0 });
    let rect = Shape::Rect(Rect {
        width: 3.0,
        height: 4.0,
    });
    let circle_bytes = zmem::write_fixed(&circle).unwrap();
    let rect_bytes = zmem::write_fixed(&rect).unwrap();
    assert_eq!(circle_bytes.len(), rect_bytes.len());
    assert_eq!(circle_bytes[0], 0);
    assert_eq!(rect_bytes[0], 1);

    let back_circle: Shape = zmem::read_fixed(&circle_bytes).unwrap();
    let back_rect: Shape = zmem::read_fixed(&rect_bytes).unwrap();
    assert_eq!(back_circle, circle);
    assert_eq!(back_rect, rect);
}

/// Empty vectors, empty strings, and a fully-used fixed string all hit their documented
/// minimum/maximum-size layouts.
#[test]
fn boundary_layouts() {
    let empty_entity = Entity {
        id: 0,
        weights: Vec::new(),
    };
    let bytes = zmem::write_variable(&empty_entity).unwrap();
    // header(8) + id(8) + inline ref(16) = 32, already a multiple of 8, no payload bytes.
    assert_eq!(bytes.len(), 32);
    let back: Entity = zmem::read_variable(&bytes, ReadMode::Permissive).unwrap();
    assert_eq!(back, empty_entity);

    let max_len_str = FixedStr::<8>::new("1234567");
    assert_eq!(max_len_str.as_bytes()[7], 0);
    assert_eq!(&max_len_str.as_bytes()[..7], b"1234567");
}

/// A map whose value is itself variable-layout encodes entries with offsets relative to the
/// start of the variable section, not to each value's own byte 8.
#[test]
fn map_with_variable_value_round_trips() {
    let mut entries = BTreeMap::new();
    entries.insert(
        FixedStr::<8>::new("a"),
        Entity {
            id: 1,
            weights: vec![1.0],
        },
    );
    entries.insert(
        FixedStr::<8>::new("b"),
        Entity {
            id: 2,
            weights: vec![2.0, 3.0],
        },
    );
    let catalog = Catalog { entries };
    let bytes = zmem::write_variable(&catalog).unwrap();
    let back: Catalog = zmem::read_variable(&bytes, ReadMode::Permissive).unwrap();
    assert_eq!(back, catalog);
}

/// Determinism: two structurally equal values, built independently, serialize to identical
/// bytes — including through a `BTreeSet`-mediated round trip that forces reallocation.
#[test]
fn determinism_across_independent_constructions() {
    let a = Entity {
        id: 42,
        weights: vec![1.0, 2.0, 3.0],
    };
    let b = Entity {
        id: 42,
        weights: [1.0, 2.0, 3.0].to_vec(),
    };
    assert_eq!(zmem::write_variable(&a).unwrap(), zmem::write_variable(&b).unwrap());

    let mut seen_lengths = BTreeSet::new();
    seen_lengths.insert(zmem::size_variable(&a));
    seen_lengths.insert(zmem::size_variable(&b));
    assert_eq!(seen_lengths.len(), 1);
}
