//! Arena-backed FP-tree. Nodes live in a `Vec` and refer to each other by
//! index; `parent` points towards the root and `next` threads together all
//! nodes carrying the same item, in insertion order.

use std::collections::HashMap;

use crate::Item;

#[derive(Debug, Clone)]
pub struct Node<I> {
    /// `None` only for the root sentinel.
    pub key: Option<I>,
    pub count: u64,
    pub parent: Option<usize>,
    pub next: Option<usize>,
    pub children: HashMap<I, usize>,
}

/// Head table entry: the first node of an item's chain and the item's
/// support summed over the whole chain.
#[derive(Debug, Clone)]
pub struct Head {
    pub first: usize,
    pub support: u64,
}

#[derive(Debug, Clone)]
pub struct Tree<I> {
    pub nodes: Vec<Node<I>>,
    pub heads: HashMap<I, Head>,
}

impl<I: Item> Default for Tree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> Tree<I> {
    pub fn new() -> Self {
        let root = Node {
            key: None,
            count: 0,
            parent: None,
            next: None,
            children: HashMap::new(),
        };
        Self {
            nodes: vec![root],
            heads: HashMap::new(),
        }
    }

    /// Inserts one transaction path from the root, adding `count` along it.
    /// `last` carries the tail node of every item's chain between inserts so
    /// new nodes can be threaded in insertion order.
    pub fn insert(&mut self, items: &[I], count: u64, last: &mut HashMap<I, usize>) {
        let mut current = 0;
        for item in items {
            let index = match self.nodes[current].children.get(item) {
                Some(&index) => index,
                None => {
                    let index = self.nodes.len();
                    self.nodes.push(Node {
                        key: Some(item.clone()),
                        count: 0,
                        parent: Some(current),
                        next: None,
                        children: HashMap::new(),
                    });
                    self.nodes[current].children.insert(item.clone(), index);
                    if let Some(previous) = last.insert(item.clone(), index) {
                        self.nodes[previous].next = Some(index);
                    }
                    index
                }
            };
            self.nodes[index].count += count;
            let head = self.heads.entry(item.clone()).or_insert(Head {
                first: index,
                support: 0,
            });
            head.support += count;
            current = index;
        }
    }

    /// Head items with their aggregated support, least frequent first.
    pub fn heads_by_support(&self) -> Vec<(I, u64)> {
        let mut heads: Vec<(I, u64)> = self
            .heads
            .iter()
            .map(|(item, head)| (item.clone(), head.support))
            .collect();
        heads.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        heads
    }

    /// Builds the conditional tree for `item`: a parallel structure of fresh
    /// nodes covering the ancestor paths of every node in the item's chain,
    /// each path weighted by that chain node's count. Each original node is
    /// duplicated at most once (tracked in `visited`); the chain nodes
    /// themselves are not carried over.
    pub fn conditional(&self, item: &I) -> Tree<I> {
        let mut cond = Tree::new();
        let mut visited: HashMap<usize, usize> = HashMap::new();
        let mut last: HashMap<I, usize> = HashMap::new();

        let mut chain = self.heads.get(item).map(|head| head.first);
        while let Some(node) = chain {
            let count = self.nodes[node].count;
            // Walk towards the root, mirroring each ancestor and linking the
            // fresh nodes bottom-up as the walk climbs.
            let mut below: Option<usize> = None;
            let mut current = self.nodes[node].parent;
            while let Some(ancestor) = current {
                let Some(key) = self.nodes[ancestor].key.clone() else {
                    break;
                };
                let index = match visited.get(&ancestor) {
                    Some(&index) => index,
                    None => {
                        let index = cond.nodes.len();
                        cond.nodes.push(Node {
                            key: Some(key.clone()),
                            count: 0,
                            parent: None,
                            next: None,
                            children: HashMap::new(),
                        });
                        visited.insert(ancestor, index);
                        if let Some(previous) = last.insert(key.clone(), index) {
                            cond.nodes[previous].next = Some(index);
                        }
                        index
                    }
                };
                cond.nodes[index].count += count;
                let head = cond.heads.entry(key).or_insert(Head {
                    first: index,
                    support: 0,
                });
                head.support += count;
                if let Some(child) = below {
                    cond.nodes[child].parent = Some(index);
                }
                below = Some(index);
                current = self.nodes[ancestor].parent;
            }
            if let Some(top) = below {
                cond.nodes[top].parent = Some(0);
            }
            chain = self.nodes[node].next;
        }
        cond
    }

    /// Splices every node whose item falls below `min_support` out of the
    /// tree: surviving nodes are re-parented onto their nearest frequent
    /// strict ancestor, and two chain mates landing on the same parent are
    /// merged (counts summed, the later node unlinked). Chains are processed
    /// least frequent first; `merged` resolves parents that pointed at a
    /// node merged away in an earlier pass.
    pub fn prune(&mut self, min_support: u64) {
        let order = self.heads_by_support();
        let mut merged: HashMap<usize, usize> = HashMap::new();

        for (item, support) in &order {
            if *support < min_support {
                continue;
            }
            let Some(head) = self.heads.get(item) else {
                continue;
            };
            let mut seen: HashMap<usize, usize> = HashMap::new();
            let mut previous: Option<usize> = None;
            let mut chain = Some(head.first);
            while let Some(node) = chain {
                let next = self.nodes[node].next;
                let parent = self.frequent_ancestor(node, min_support, &merged);
                self.nodes[node].parent = Some(parent);
                match seen.get(&parent) {
                    Some(&survivor) => {
                        self.nodes[survivor].count += self.nodes[node].count;
                        merged.insert(node, survivor);
                        self.nodes[node].next = None;
                        // The first chain node always survives, so there is
                        // a predecessor to relink past the merged node.
                        if let Some(previous) = previous {
                            self.nodes[previous].next = next;
                        }
                    }
                    None => {
                        seen.insert(parent, node);
                        previous = Some(node);
                    }
                }
                chain = next;
            }
        }
        self.heads.retain(|_, head| head.support >= min_support);
    }

    /// Nearest strict ancestor whose head support meets `min_support`, or
    /// the root. Hops through `merged` so the walk never settles on a node
    /// that was merged away.
    fn frequent_ancestor(
        &self,
        node: usize,
        min_support: u64,
        merged: &HashMap<usize, usize>,
    ) -> usize {
        let resolve = |mut index: usize| {
            while let Some(&target) = merged.get(&index) {
                index = target;
            }
            index
        };
        let mut current = resolve(self.nodes[node].parent.unwrap_or(0));
        loop {
            let Some(key) = &self.nodes[current].key else {
                return current;
            };
            if self.heads.get(key).is_some_and(|head| head.support >= min_support) {
                return current;
            }
            current = resolve(self.nodes[current].parent.unwrap_or(0));
        }
    }
}
