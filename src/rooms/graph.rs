use crate::clues::ClueTree;
use crate::suspects::SuspectRegistry;

/// Index of a room inside its [`RoomGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

#[derive(Debug)]
pub struct Room {
    pub name: String,
    pub clue: Option<String>,
    pub suspects: Vec<String>,
    collected: bool,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn is_collected(&self) -> bool {
        self.collected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The mansion map: a binary tree of rooms stored in an arena.
///
/// Rooms are added with [`RoomGraph::add_room`] and linked with
/// [`RoomGraph::connect`]. The first room added is the root. Linking
/// refuses anything that would give a room two parents or close a
/// cycle, so the structure stays a tree.
#[derive(Debug, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    has_parent: Vec<bool>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        clue: Option<String>,
        suspects: impl IntoIterator<Item = S>,
    ) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.into(),
            clue: clue.filter(|c| !c.is_empty()),
            suspects: suspects.into_iter().map(Into::into).collect(),
            collected: false,
            left: None,
            right: None,
        });
        self.has_parent.push(false);
        id
    }

    /// Attaches `child` under `parent` on the given side.
    /// Returns `false` (and changes nothing) if the slot is taken, the
    /// child already has a parent, or the link would create a cycle.
    pub fn connect(&mut self, parent: RoomId, side: Side, child: RoomId) -> bool {
        if parent == child || self.has_parent[child.0] || self.child(parent, side).is_some() {
            return false;
        }
        // `child` has no parent, so it is the top of its own subtree;
        // linking is only a cycle if `parent` sits inside that subtree.
        if self.subtree_contains(child, parent) {
            return false;
        }
        let room = &mut self.rooms[parent.0];
        match side {
            Side::Left => room.left = Some(child),
            Side::Right => room.right = Some(child),
        }
        self.has_parent[child.0] = true;
        true
    }

    pub fn root(&self) -> Option<RoomId> {
        (!self.rooms.is_empty()).then_some(RoomId(0))
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn child(&self, id: RoomId, side: Side) -> Option<RoomId> {
        let room = &self.rooms[id.0];
        match side {
            Side::Left => room.left,
            Side::Right => room.right,
        }
    }

    #[cfg(test)]
    /// Rooms reachable from the root, parent before children.
    pub fn reachable(&self) -> Vec<RoomId> {
        let mut seen = Vec::new();
        let mut stack: Vec<RoomId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            seen.push(id);
            stack.extend(self.child(id, Side::Right));
            stack.extend(self.child(id, Side::Left));
        }
        seen
    }

    fn subtree_contains(&self, top: RoomId, target: RoomId) -> bool {
        let mut stack = vec![top];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            stack.extend(self.child(id, Side::Left));
            stack.extend(self.child(id, Side::Right));
        }
        false
    }

    /// Picks up the room's clue, if it has one not yet taken: stores it in
    /// `clues` and cites every suspect named on the room. Later calls for
    /// the same room return `None` and touch nothing. Returns the clue text.
    pub fn collect(
        &mut self,
        id: RoomId,
        clues: &mut ClueTree,
        registry: &mut SuspectRegistry,
    ) -> Option<String> {
        let room = &mut self.rooms[id.0];
        if room.collected {
            return None;
        }
        let clue = room.clue.as_deref()?;

        clues.insert(clue);
        for suspect in &room.suspects {
            registry.associate(clue, suspect);
        }
        room.collected = true;
        tracing::info!(room = %room.name, clue, "clue collected");

        Some(clue.to_string())
    }
}
