// src/noyau/fonctions.rs
//
// Registre de fonctions nommées, possédé par l'hôte.
//
// Contrat : le compilateur ne lit QUE l'arité (jamais les types d'arguments
// au-delà du compte); l'évaluation appelle la procédure avec les arguments
// DÉJÀ évalués. Le registre est en lecture seule pendant la compilation et
// partageable entre compilations concurrentes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::erreurs::ErreurEval;

/// Procédure d'évaluation d'une fonction : reçoit exactement `arite`
/// arguments évalués, rend un entier ou une faute d'évaluation.
pub type ProcedureFonction = dyn Fn(&[i64]) -> Result<i64, ErreurEval> + Send + Sync;

/// Descripteur de fonction : nom + arité fixe + procédure.
pub struct Fonction {
    nom: String,
    arite: usize,
    procedure: Box<ProcedureFonction>,
}

impl Fonction {
    /// Le nom est rangé en minuscules : les formules sont normalisées en
    /// minuscules avant toute recherche.
    pub fn nouvelle(
        nom: impl Into<String>,
        arite: usize,
        procedure: impl Fn(&[i64]) -> Result<i64, ErreurEval> + Send + Sync + 'static,
    ) -> Self {
        Self {
            nom: nom.into().to_lowercase(),
            arite,
            procedure: Box::new(procedure),
        }
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn arite(&self) -> usize {
        self.arite
    }

    /// Applique la procédure. L'appelant (eval.rs) garantit le compte
    /// d'arguments : c'est l'invariant d'arité du noeud Fonction.
    pub fn applique(&self, arguments: &[i64]) -> Result<i64, ErreurEval> {
        debug_assert_eq!(arguments.len(), self.arite);
        (self.procedure)(arguments)
    }
}

impl fmt::Debug for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fonction")
            .field("nom", &self.nom)
            .field("arite", &self.arite)
            .finish_non_exhaustive()
    }
}

/// Registre immuable pendant la compilation. Les descripteurs sont partagés
/// (`Arc`) : un arbre fini reste évaluable sans retourner voir le registre.
#[derive(Debug, Default)]
pub struct Registre {
    table: HashMap<String, Arc<Fonction>>,
}

impl Registre {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /// Inscrit une fonction; remplace silencieusement un homonyme.
    pub fn inscrit(&mut self, fonction: Fonction) {
        self.table
            .insert(fonction.nom.clone(), Arc::new(fonction));
    }

    pub fn cherche(&self, nom: &str) -> Option<&Arc<Fonction>> {
        self.table.get(nom)
    }
}
