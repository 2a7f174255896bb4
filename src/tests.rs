use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{Config, LevelFilter, TestLogger};

use super::*;
use crate::index::NodeIndex;
use crate::node::{Color, Node};

type IntTree = RbTree<i32, Identity, Natural>;

struct KeyGenerator {
    rng: StdRng,
    unique: HashSet<i32>,
    limit: i32,
}

impl KeyGenerator {
    fn new(seed: [u8; 32]) -> Self {
        const LIMIT: i32 = 100_000;
        Self {
            rng: SeedableRng::from_seed(seed),
            unique: HashSet::new(),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> i32 {
        self.rng.gen_range(0..self.limit)
    }

    fn next_unique(&mut self) -> i32 {
        let mut key = self.next();
        while self.unique.contains(&key) {
            key = self.next();
        }
        self.unique.insert(key);
        key
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

type Shape<Ix> = (
    NodeIndex<Ix>,
    Vec<(NodeIndex<Ix>, NodeIndex<Ix>, NodeIndex<Ix>, Color)>,
);

impl<T, P, C, Ix> RbTree<T, P, C, Ix>
where
    P: KeyOf<T>,
    C: Compare<P::Key>,
    Ix: IndexType,
{
    /// 1. Every node is either red or black.
    /// 2. The root is black.
    /// 3. Every leaf (NIL) is black.
    /// 4. If a node is red, then both its children are black.
    /// 5. For each node, all simple paths from the node to descendant leaves contain the
    /// same number of black nodes.
    ///
    /// Also checks key order, parent links, the sentinel and the length.
    fn check_rb_properties(&self) {
        let sentinel = NodeIndex::sentinel();
        assert!(self.node_ref(self.root, Node::is_black));
        assert!(self.node_ref(sentinel, Node::is_black));
        assert!(self.node_ref(sentinel, Node::is_vacant));
        assert_eq!(self.node_ref(sentinel, Node::parent), self.root);
        if !self.root.is_sentinel() {
            assert_eq!(self.node_ref(self.root, Node::parent), sentinel);
        }
        self.check_children_color(self.root);
        let _ignore = self.check_black_height(self.root);
        self.check_links(self.root);
        self.check_order();
        assert_eq!(self.count_reachable(), self.len());
        assert_eq!(self.nodes.len(), self.len() + 1 + self.count_free());
    }

    fn check_children_color(&self, x: NodeIndex<Ix>) {
        if x.is_sentinel() {
            return;
        }
        self.check_children_color(self.node_ref(x, Node::left));
        self.check_children_color(self.node_ref(x, Node::right));
        if self.node_ref(x, Node::is_red) {
            assert!(matches!(self.left_ref(x, Node::color), Color::Black));
            assert!(matches!(self.right_ref(x, Node::color), Color::Black));
        }
    }

    fn check_black_height(&self, x: NodeIndex<Ix>) -> usize {
        if x.is_sentinel() {
            return 0;
        }
        let lefth = self.check_black_height(self.node_ref(x, Node::left));
        let righth = self.check_black_height(self.node_ref(x, Node::right));
        assert_eq!(lefth, righth);
        if self.node_ref(x, Node::is_black) {
            return lefth + 1;
        }
        lefth
    }

    fn check_links(&self, x: NodeIndex<Ix>) {
        if x.is_sentinel() {
            return;
        }
        for child in [self.node_ref(x, Node::left), self.node_ref(x, Node::right)] {
            if !child.is_sentinel() {
                assert_eq!(self.node_ref(child, Node::parent), x);
                self.check_links(child);
            }
        }
    }

    fn check_order(&self) {
        let keys: Vec<_> = self.iter().map(|p| self.projection().key_of(p)).collect();
        for pair in keys.windows(2) {
            assert!(self.comparator().less(pair[0], pair[1]));
        }
    }

    fn count_reachable(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root];
        while let Some(x) = stack.pop() {
            if x.is_sentinel() {
                continue;
            }
            count += 1;
            stack.push(self.node_ref(x, Node::left));
            stack.push(self.node_ref(x, Node::right));
        }
        count
    }

    fn count_free(&self) -> usize {
        let mut count = 0;
        let mut x = self.free;
        while !x.is_sentinel() {
            assert!(self.node_ref(x, Node::is_vacant));
            count += 1;
            x = self.node_ref(x, Node::left);
        }
        count
    }

    fn shape(&self) -> Shape<Ix> {
        let links = self
            .nodes
            .iter()
            .map(|n| (n.left, n.right, n.parent, n.color))
            .collect();
        (self.root, links)
    }
}

fn init_logger() {
    let _ignore = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn with_tree_and_generator(test_fn: impl Fn(IntTree, KeyGenerator)) {
    init_logger();
    let seeds = vec![[0; 32], [1; 32], [2; 32]];
    for seed in seeds {
        let gen = KeyGenerator::new(seed);
        let tree = RbTree::new(Identity, Natural);
        test_fn(tree, gen);
    }
}

fn keys_of(tree: &IntTree) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[test]
fn red_black_tree_properties_is_satisfied() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys {
            let _ignore = tree.insert(k).unwrap();
        }
        assert_eq!(tree.len(), 1000);
        tree.check_rb_properties();
    });
}

#[test]
fn tree_len_will_update() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(100)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k).unwrap();
        }
        assert_eq!(tree.len(), 100);
        for k in keys {
            let _ignore = tree.remove(&k);
        }
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    });
}

#[test]
fn properties_hold_through_random_insert_and_remove() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k).unwrap();
            tree.check_rb_properties();
        }
        assert_eq!(tree.len(), 1000);
        gen.shuffle(&mut keys);
        for k in keys {
            assert_eq!(tree.remove(&k), Some(k));
            tree.check_rb_properties();
        }
        assert!(tree.is_empty());
        assert!(tree.first().is_sentinel());
        assert!(tree.root().is_sentinel());
    });
}

#[test]
fn remove_non_exist_key_will_do_nothing() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys {
            let _ignore = tree.insert(k).unwrap();
        }
        let before = tree.shape();
        let to_remove: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in to_remove {
            assert_eq!(tree.remove(&k), None);
        }
        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.shape(), before);
    });
}

#[test]
fn sorted_scenario_with_bounds_and_remove() {
    let mut tree = IntTree::new(Identity, Natural);
    for k in [10, 20, 5, 15, 3] {
        assert!(tree.insert(k).unwrap().is_inserted());
    }
    assert_eq!(keys_of(&tree), vec![3, 5, 10, 15, 20]);
    assert_eq!(tree.get(tree.lower_bound(&12)), Some(&15));
    assert_eq!(tree.get(tree.upper_bound(&10)), Some(&15));
    assert_eq!(tree.get(tree.lower_bound(&10)), Some(&10));
    assert!(tree.lower_bound(&21).is_sentinel());
    assert!(tree.upper_bound(&20).is_sentinel());
    assert_eq!(tree.get(tree.lower_bound(&0)), Some(&3));

    assert_eq!(tree.remove(&10), Some(10));
    assert_eq!(keys_of(&tree), vec![3, 5, 15, 20]);
    tree.check_rb_properties();
}

#[test]
fn search_finds_present_keys_only() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k).unwrap();
        }
        let (removed, kept) = keys.split_at(250);
        for k in removed {
            let _ignore = tree.remove(k);
        }
        for k in kept {
            assert_eq!(tree.key(tree.search(k)), Some(k));
        }
        for k in removed {
            assert!(tree.search(k).is_sentinel());
            assert!(!tree.contains(k));
        }
        for _ in 0..500 {
            let k = gen.next_unique();
            assert!(tree.search(&k).is_sentinel());
        }
    });
}

#[test]
fn bounds_agree_with_btreeset() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .collect();
        let model: BTreeSet<_> = keys.iter().copied().collect();
        for k in keys {
            let _ignore = tree.insert(k).unwrap();
        }
        for _ in 0..1000 {
            let q = gen.next();
            let lower = model.range(q..).next();
            let upper = model
                .range((Bound::Excluded(q), Bound::Unbounded))
                .next();
            assert_eq!(tree.get(tree.lower_bound(&q)), lower);
            assert_eq!(tree.get(tree.upper_bound(&q)), upper);
        }
    });
}

#[test]
fn duplicate_insert_hands_payload_back() {
    let mut tree: RbTree<(i32, &str), First, Natural> = RbTree::new(First, Natural);
    let first = tree.insert((1, "a")).unwrap();
    assert!(first.is_inserted());
    let nodes = tree.nodes.len();
    match tree.insert((1, "b")).unwrap() {
        Insertion::Occupied(idx, rejected) => {
            assert_eq!(idx, first.index());
            assert_eq!(rejected, (1, "b"));
        }
        Insertion::Inserted(_) => panic!("duplicate key was linked"),
    }
    assert_eq!(tree.nodes.len(), nodes);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(first.index()), Some(&(1, "a")));
}

#[test]
fn handle_keeps_its_key_after_unrelated_remove() {
    let mut tree = IntTree::new(Identity, Natural);
    let one = tree.insert(1).unwrap().index();
    let two = tree.insert(2).unwrap().index();
    let three = tree.insert(3).unwrap().index();
    assert_eq!(tree.remove(&1), Some(1));
    assert_eq!(tree.get(two), Some(&2));
    assert_eq!(tree.get(three), Some(&3));
    assert_eq!(tree.get(one), None);
    assert_eq!(tree.remove_at(one), None);

    let slots = tree.nodes.len();
    let four = tree.insert(4).unwrap().index();
    assert_eq!(four, one);
    assert_eq!(tree.nodes.len(), slots);
    assert_eq!(keys_of(&tree), vec![2, 3, 4]);
    tree.check_rb_properties();
}

#[test]
fn handles_stay_valid_through_random_removes() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut handles: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .map(|k| (k, tree.insert(k).unwrap().index()))
            .collect();
        gen.shuffle(&mut handles);
        let (removed, kept) = handles.split_at(250);
        for (k, _) in removed {
            let _ignore = tree.remove(k);
        }
        for (k, idx) in kept {
            assert_eq!(tree.get(*idx), Some(k));
        }
        let slots = tree.nodes.len();
        for _ in 0..250 {
            let _ignore = tree.insert(gen.next_unique()).unwrap();
        }
        assert_eq!(tree.nodes.len(), slots);
        for (k, idx) in kept {
            assert_eq!(tree.get(*idx), Some(k));
        }
        tree.check_rb_properties();
    });
}

#[test]
fn foreign_index_reads_as_end_position() {
    let mut tree = IntTree::new(Identity, Natural);
    let far = NodeIndex::new(50);
    assert!(tree.increment(far).is_sentinel());
    assert!(tree.decrement(far).is_sentinel());
    let mut cursor = tree.cursor(far);
    assert!(cursor.is_end());
    cursor.move_next();
    assert!(cursor.is_end());

    for k in [5, 1, 9] {
        let _ignore = tree.insert(k).unwrap();
    }
    assert!(tree.increment(far).is_sentinel());
    assert!(tree.decrement(far).is_sentinel());
    assert!(tree.minimum(far).is_sentinel());
    assert!(tree.maximum(far).is_sentinel());
    assert_eq!(tree.get(far), None);
    assert_eq!(tree.remove_at(far), None);

    let mut cursor = tree.cursor(far);
    assert_eq!(cursor, tree.end());
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&1));
    let mut cursor = tree.cursor_mut(far);
    assert!(cursor.is_end());
    assert_eq!(cursor.remove_current(), None);

    let freed = tree.search(&5);
    let _ignore = tree.remove(&5);
    assert!(tree.increment(freed).is_sentinel());
    assert!(tree.decrement(freed).is_sentinel());
    assert!(tree.cursor(freed).is_end());
    tree.check_rb_properties();
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Fragile(i32);

impl Clone for Fragile {
    fn clone(&self) -> Self {
        assert_ne!(self.0, 13, "unlucky payload");
        Fragile(self.0)
    }
}

#[test]
fn clone_from_leaves_target_intact_when_copy_fails() {
    let mut source: RbTree<Fragile, Identity, Natural> = RbTree::new(Identity, Natural);
    let mut target: RbTree<Fragile, Identity, Natural> = RbTree::new(Identity, Natural);
    for k in [1, 13, 20] {
        let _ignore = source.insert(Fragile(k)).unwrap();
    }
    for k in [100, 200] {
        let _ignore = target.insert(Fragile(k)).unwrap();
    }
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        target.clone_from(&source);
    }));
    assert!(result.is_err());
    assert_eq!(target.iter().map(|f| f.0).collect::<Vec<_>>(), vec![100, 200]);
    target.check_rb_properties();
}

#[test]
fn iterate_through_tree_is_sorted() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k).unwrap();
        }
        keys.sort_unstable();
        assert_eq!(keys_of(&tree), keys);
        let backward: Vec<_> = tree.iter().rev().copied().collect();
        keys.reverse();
        assert_eq!(backward, keys);
        assert_eq!(tree.iter().len(), 1000);
    });
}

#[test]
fn increment_then_decrement_returns_to_node() {
    with_tree_and_generator(|mut tree, mut gen| {
        for k in std::iter::repeat_with(|| gen.next_unique()).take(300) {
            let _ignore = tree.insert(k).unwrap();
        }
        let first = tree.first();
        let last = tree.last();
        let mut x = first;
        while !x.is_sentinel() {
            let next = tree.increment(x);
            if x != last {
                assert_eq!(tree.decrement(next), x);
            }
            if x != first {
                assert_eq!(tree.increment(tree.decrement(x)), x);
            }
            x = next;
        }
    });
}

#[test]
fn forward_and_backward_walks_visit_same_keys() {
    with_tree_and_generator(|mut tree, mut gen| {
        for k in std::iter::repeat_with(|| gen.next_unique()).take(300) {
            let _ignore = tree.insert(k).unwrap();
        }
        let mut forward = vec![];
        let mut x = tree.first();
        while !x.is_sentinel() {
            forward.push(*tree.get(x).unwrap());
            x = tree.increment(x);
        }
        let mut backward = vec![];
        let mut x = tree.last();
        while !x.is_sentinel() {
            backward.push(*tree.get(x).unwrap());
            x = tree.decrement(x);
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 300);
    });
}

#[test]
fn cursor_wraps_through_end_position() {
    let mut tree = IntTree::new(Identity, Natural);
    let mut end = tree.end();
    end.move_next();
    assert!(end.is_end());

    for k in [4, 2, 6] {
        let _ignore = tree.insert(k).unwrap();
    }
    let mut cursor = tree.end();
    assert_eq!(cursor.get(), None);
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&6));
    cursor.move_next();
    assert!(cursor.is_end());
    assert_eq!(cursor, tree.end());
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&2));
    assert_eq!(cursor, tree.cursor_front());
    assert_eq!(cursor.peek_next(), Some(&4));
    assert_eq!(cursor.peek_prev(), None);
    assert_eq!(tree.cursor_back().key(), Some(&6));
}

#[test]
fn cursor_remove_current_walks_to_successor() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(300)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k).unwrap();
        }
        keys.sort_unstable();
        let mut removed = vec![];
        let mut cursor = tree.cursor_front_mut();
        while let Some(k) = cursor.remove_current() {
            removed.push(k);
        }
        assert!(cursor.is_end());
        assert_eq!(removed, keys);
        tree.check_rb_properties();
        assert!(tree.is_empty());
    });
}

#[test]
fn cursor_mut_edits_payload_in_place() {
    let mut tree: RbTree<(i32, i32), First, Natural> = RbTree::new(First, Natural);
    for k in 0..10 {
        let _ignore = tree.insert((k, 0)).unwrap();
    }
    let start = tree.search(&3);
    let mut cursor = tree.cursor_mut(start);
    while let Some(entry) = cursor.get_mut() {
        entry.1 += 1;
        cursor.move_next();
    }
    let values: Vec<_> = tree.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0, 0, 0, 1, 1, 1, 1, 1, 1, 1]);

    let mut cursor = tree.cursor_mut(NodeIndex::sentinel());
    assert!(cursor.insert((42, 0)).unwrap().is_inserted());
    assert!(cursor.is_end());
    assert_eq!(cursor.as_cursor().get(), None);
    assert_eq!(tree.len(), 11);
}

#[test]
fn remove_range_is_half_open() {
    let mut tree = IntTree::new(Identity, Natural);
    for k in 0..20 {
        let _ignore = tree.insert(k).unwrap();
    }
    assert_eq!(tree.remove_range(&5, &10), 5);
    assert_eq!(
        keys_of(&tree),
        vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]
    );
    assert_eq!(tree.remove_range(&10, &10), 0);
    assert_eq!(tree.remove_range(&15, &3), 0);
    assert_eq!(tree.remove_range(&-5, &100), 15);
    tree.check_rb_properties();
    assert!(tree.is_empty());
}

#[test]
fn tree_clear_is_ok() {
    let mut tree = IntTree::new(Identity, Natural);
    for k in [1, 2, 3] {
        let _ignore = tree.insert(k).unwrap();
    }
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.nodes.len(), 1);
    assert!(tree.nodes[0].is_vacant());
    assert!(tree.free.is_sentinel());
    tree.check_rb_properties();
    let _ignore = tree.insert(7).unwrap();
    assert_eq!(keys_of(&tree), vec![7]);
}

#[test]
fn swap_exchanges_contents_and_order() {
    let mut asc = IntTree::new(Identity, Natural);
    let mut other = IntTree::new(Identity, Natural);
    for k in [1, 2, 3] {
        let _ignore = asc.insert(k).unwrap();
    }
    let _ignore = other.insert(9).unwrap();
    asc.swap(&mut other);
    assert_eq!(keys_of(&asc), vec![9]);
    assert_eq!(keys_of(&other), vec![1, 2, 3]);
    asc.check_rb_properties();
    other.check_rb_properties();
}

#[test]
fn clone_rebuilds_by_reinsertion() {
    with_tree_and_generator(|mut tree, mut gen| {
        for k in std::iter::repeat_with(|| gen.next_unique()).take(500) {
            let _ignore = tree.insert(k).unwrap();
        }
        let copy = tree.try_clone().unwrap();
        copy.check_rb_properties();
        assert_eq!(keys_of(&copy), keys_of(&tree));

        let mut target = IntTree::new(Identity, Natural);
        let _ignore = target.insert(-1).unwrap();
        target.clone_from(&tree);
        target.check_rb_properties();
        assert_eq!(keys_of(&target), keys_of(&tree));
    });
}

#[test]
fn into_iter_yields_owned_payloads_from_both_ends() {
    let mut tree = IntTree::new(Identity, Natural);
    for k in [5, 1, 4, 2, 3] {
        let _ignore = tree.insert(k).unwrap();
    }
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn payloads_in_order_mut_follows_key_order() {
    let mut tree: RbTree<(i32, i32), First, Natural> = RbTree::new(First, Natural);
    for k in [3, 1, 2] {
        let _ignore = tree.insert((k, 0)).unwrap();
    }
    for (rank, entry) in tree.payloads_in_order_mut().into_iter().enumerate() {
        entry.1 = rank as i32;
    }
    let pairs: Vec<_> = tree.iter().copied().collect();
    assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
}

#[test]
fn custom_comparator_orders_descending() {
    let mut tree: RbTree<i32, Identity, _> = RbTree::new(Identity, |a: &i32, b: &i32| b < a);
    for k in 0..100 {
        let _ignore = tree.insert(k).unwrap();
    }
    tree.check_rb_properties();
    let keys: Vec<_> = tree.iter().copied().collect();
    assert_eq!(keys, (0..100).rev().collect::<Vec<_>>());
    // lower bound follows the comparator: first key not ordered before 50
    assert_eq!(tree.get(tree.lower_bound(&50)), Some(&50));
    assert_eq!(tree.get(tree.upper_bound(&50)), Some(&49));
}

#[test]
fn full_index_space_reports_capacity_exceeded() {
    init_logger();
    let mut tree: RbTree<u32, Identity, Natural, u16> = RbTree::new(Identity, Natural);
    let capacity = u16::MAX as u32 - 1;
    for k in 0..capacity {
        let _ignore = tree.insert(k).unwrap();
    }
    assert_eq!(tree.len(), capacity as usize);
    let before = tree.shape();
    assert_eq!(tree.insert(capacity), Err(Error::CapacityExceeded));
    assert_eq!(tree.len(), capacity as usize);
    assert_eq!(tree.shape(), before);
    assert!(matches!(tree.insert(0), Ok(Insertion::Occupied(_, 0))));
    tree.check_rb_properties();
}

#[cfg(feature = "graphviz")]
#[test]
fn tree_write_dot_is_ok() {
    let mut tree = IntTree::new(Identity, Natural);
    for k in [2, 1, 3] {
        let _ignore = tree.insert(k).unwrap();
    }
    let mut out = Vec::new();
    tree.write_dot(&mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert!(dot.starts_with("digraph rbtree {"));
    assert!(dot.contains("label=\"2\", fillcolor=black"));
    assert!(dot.contains("label=\"1\", fillcolor=red"));
    assert_eq!(dot.matches("->").count(), 2);
}

proptest! {
    #[test]
    fn random_operations_match_btreeset(
        ops in prop::collection::vec((any::<bool>(), 0i32..200), 0..400)
    ) {
        let mut tree = IntTree::new(Identity, Natural);
        let mut model = BTreeSet::new();
        for (insert, key) in ops {
            if insert {
                let inserted = tree.insert(key).unwrap().is_inserted();
                prop_assert_eq!(inserted, model.insert(key));
            } else {
                prop_assert_eq!(tree.remove(&key), model.take(&key));
            }
            tree.check_rb_properties();
        }
        prop_assert!(tree.iter().eq(model.iter()));
        prop_assert_eq!(tree.len(), model.len());
    }

    #[test]
    fn bounds_match_btreeset(
        keys in prop::collection::vec(0i32..500, 0..200),
        query in 0i32..500
    ) {
        let mut tree = IntTree::new(Identity, Natural);
        for k in &keys {
            let _ignore = tree.insert(*k).unwrap();
        }
        let model: BTreeSet<_> = keys.into_iter().collect();
        prop_assert_eq!(tree.get(tree.lower_bound(&query)), model.range(query..).next());
        prop_assert_eq!(
            tree.get(tree.upper_bound(&query)),
            model.range((Bound::Excluded(query), Bound::Unbounded)).next()
        );
    }
}
