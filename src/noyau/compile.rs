// src/noyau/compile.rs
//
// Pipeline complet : normalise -> valide -> découpe -> RPN -> arbre.
//
// Tout-ou-rien : la moindre erreur rend la compilation entière invalide,
// aucun résultat partiel. Retenter la même entrée redonne la même erreur
// (compilation pure et déterministe).

use tracing::trace;

use super::erreurs::{ErreurCompile, ErreurEval};
use super::eval::evalue;
use super::expr::Noeud;
use super::fonctions::Registre;
use super::jetons::{decoupe, normalise, valide};
use super::rpn::{depuis_rpn, en_rpn, format_rpn};

/// Résultat d'une compilation : l'arbre et la liste ordonnée des variables
/// distinctes référencées (premier-vu premier-servi). Immuable une fois
/// rendu; la propriété passe à l'appelant, qui garde l'arbre aussi
/// longtemps qu'il veut l'évaluer.
#[derive(Clone, Debug, PartialEq)]
pub struct Compilation {
    arbre: Noeud,
    variables: Vec<String>,
}

impl Compilation {
    pub fn arbre(&self) -> &Noeud {
        &self.arbre
    }

    /// Noms de variables dans l'ordre d'attribution des indices :
    /// `variables()[i]` est la variable que `valeurs[i]` liera à l'évaluation.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Évalue l'arbre avec les liaisons `valeurs` (indexées comme
    /// `variables()`).
    pub fn evalue(&self, valeurs: &[i64]) -> Result<i64, ErreurEval> {
        evalue(&self.arbre, valeurs)
    }
}

/// API publique : compile une formule brute contre un registre de fonctions.
///
/// Le registre n'est lu que pendant l'appel (arités seulement); il peut être
/// partagé entre compilations concurrentes tant qu'il reste immuable.
pub fn compile_expression(
    brut: &str,
    registre: &Registre,
) -> Result<Compilation, ErreurCompile> {
    // 1) Normalisation + validation de caractères
    let norme = normalise(brut);
    valide(&norme)?;

    // 2) Jetons bruts
    let jetons = decoupe(&norme);
    trace!(formule = %norme, jetons = jetons.len(), "découpe");

    // 3) RPN (shunting-yard)
    let rpn = en_rpn(&jetons)?;
    trace!(rpn = %format_rpn(&rpn), "conversion postfixe");

    // 4) Arbre + variables
    let (arbre, variables) = depuis_rpn(&rpn, registre)?;

    Ok(Compilation { arbre, variables })
}
