use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    death::DeathReason,
    player::Player,
    role::{Role, Species},
};
use crate::utils::{error::GameError, rng::RandomSource};

/// Every player of one match, in input order. Players are addressed by their id, which is
/// their index here and never changes; the roster never grows or shrinks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, GameError> {
        let mut seen = HashSet::new();
        let mut players = Vec::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            if !seen.insert(name) {
                return Err(GameError::DuplicatePlayerName(name.to_string()));
            }
            players.push(Player::new(index as u32, name.to_string()));
        }
        Ok(Roster { players })
    }

    /// Shuffles `roles` and deals them out by position, overwriting every current role.
    /// The caller is responsible for `roles.len()` matching the player count.
    pub fn assign_roles(&mut self, roles: &[Role], rng: &mut dyn RandomSource) {
        let mut deck = roles.to_vec();
        crate::utils::rng::shuffle(rng, &mut deck);
        for (player, role) in self.players.iter_mut().zip(deck) {
            player.role = role;
        }
    }

    pub fn set_role(&mut self, id: u32, role: Role) {
        if let Some(player) = self.players.get_mut(id as usize) {
            player.role = role;
        }
    }

    /// Kills a living player. Dead or unknown players are left untouched and `false` is returned.
    pub fn kill(&mut self, id: u32, turn: u32, reason: DeathReason) -> bool {
        match self.players.get_mut(id as usize) {
            Some(player) => {
                let killed = player.kill(turn, reason);
                if killed {
                    log::info!("{} died on day {} ({})", player.name, turn, reason);
                }
                killed
            }
            None => false,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.is_alive)
    }

    pub fn dead_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| !p.is_alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Ids of living players matching `pred`, in roster order.
    pub fn alive_ids_where<F>(&self, pred: F) -> Vec<u32>
    where
        F: Fn(&Player) -> bool,
    {
        self.alive_players().filter(|p| pred(p)).map(|p| p.id).collect()
    }

    pub fn alive_count_of(&self, species: Species) -> usize {
        self.alive_players()
            .filter(|p| p.role.species() == species)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng::SeededRandom;

    fn names() -> Vec<&'static str> {
        vec!["Alice", "Bob", "Charlie", "Dave", "Eve"]
    }

    #[test]
    fn test_roster_keeps_input_order() {
        let roster = Roster::new(&names()).unwrap();
        assert_eq!(roster.len(), 5);
        for (i, player) in roster.players().iter().enumerate() {
            assert_eq!(player.id, i as u32);
            assert_eq!(player.name, names()[i]);
        }
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = Roster::new(&["Alice", "Bob", "Alice"]);
        assert!(matches!(result, Err(GameError::DuplicatePlayerName(name)) if name == "Alice"));
        assert!(matches!(Roster::new(&["Alice", " "]), Err(GameError::EmptyPlayerName)));
    }

    #[test]
    fn test_assign_roles_deals_whole_deck() {
        let mut roster = Roster::new(&names()).unwrap();
        let deck = [Role::Villager, Role::Villager, Role::Villager, Role::Werewolf, Role::Werewolf];
        roster.assign_roles(&deck, &mut SeededRandom::from_seed_u64(7));

        let wolves = roster.players().iter().filter(|p| p.role == Role::Werewolf).count();
        let villagers = roster.players().iter().filter(|p| p.role == Role::Villager).count();
        assert_eq!(wolves, 2);
        assert_eq!(villagers, 3);
    }

    #[test]
    fn test_alive_and_dead_partition_roster() {
        let mut roster = Roster::new(&names()).unwrap();
        assert_eq!(roster.alive_count(), 5);

        roster.kill(0, 1, DeathReason::Attack);
        roster.kill(3, 2, DeathReason::Execute);
        assert_eq!(roster.alive_count() + roster.dead_players().count(), roster.len());
        assert!(roster.alive_players().all(|p| p.name != "Alice" && p.name != "Dave"));
    }

    #[test]
    fn test_second_kill_is_noop() {
        let mut roster = Roster::new(&names()).unwrap();
        assert!(roster.kill(1, 1, DeathReason::Attack));
        assert!(!roster.kill(1, 3, DeathReason::Execute));
        assert!(!roster.kill(99, 1, DeathReason::Attack));

        let death = roster.get(1).unwrap().death.unwrap();
        assert_eq!(death.turn, 1);
        assert_eq!(death.reason, DeathReason::Attack);
    }
}
