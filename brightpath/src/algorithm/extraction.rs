use crate::model::label::{LabelArena, LabelId};

/// walks predecessor links from `label` back to the search seed and returns the visited
/// nodes in source-to-target order. a dangling id or a cycle yields an empty sequence.
pub fn reconstruct_path(arena: &LabelArena, label: LabelId) -> Vec<usize> {
    let mut path = vec![];
    let mut next = Some(label);
    while let Some(id) = next {
        let Some(current) = arena.get(id) else {
            return vec![];
        };
        // predecessors always have smaller ids, anything else is a malformed chain
        if current.predecessor.is_some_and(|p| p >= id) {
            return vec![];
        }
        path.push(current.node);
        next = current.predecessor;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::reconstruct_path;
    use crate::model::{
        label::{Label, LabelArena, LabelId},
        RouteCost,
    };

    #[test]
    fn test_walks_back_to_seed() {
        let mut arena = LabelArena::new(4);
        let seed = arena.seed(2, RouteCost::default());
        let a = arena
            .insert_nondominated(
                Label {
                    cost: RouteCost::new(1.0, 0.0),
                    node: 0,
                    predecessor: Some(seed),
                },
                1e-12,
            )
            .expect("test invariant failed");
        let b = arena
            .insert_nondominated(
                Label {
                    cost: RouteCost::new(2.0, 0.5),
                    node: 3,
                    predecessor: Some(a),
                },
                1e-12,
            )
            .expect("test invariant failed");
        assert_eq!(reconstruct_path(&arena, b), vec![2, 0, 3]);
        assert_eq!(reconstruct_path(&arena, seed), vec![2]);
    }

    #[test]
    fn test_malformed_chain_is_empty() {
        let mut arena = LabelArena::new(2);
        arena.seed(0, RouteCost::default());
        assert!(reconstruct_path(&arena, LabelId(9)).is_empty());

        let looped = arena
            .insert_nondominated(
                Label {
                    cost: RouteCost::new(1.0, 1.0),
                    node: 1,
                    predecessor: Some(LabelId(1)),
                },
                1e-12,
            )
            .expect("test invariant failed");
        assert!(reconstruct_path(&arena, looped).is_empty());
    }
}
