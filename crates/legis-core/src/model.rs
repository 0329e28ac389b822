use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProposalStatus {
    Apresentada,
    EmTramitacao,
    EmPauta,
    EmDiscussao,
    Aprovada,
    Rejeitada,
    Vetada,
    Arquivada,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Agendada,
    Convocada,
    EmAndamento,
    Suspensa,
    Concluida,
    Cancelada,
    SemQuorum,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VetoStatus {
    Registrado,
    EmApreciacao,
    Mantido,
    Rejeitado,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProposalType {
    ProjetoLei,
    ProjetoLeiComplementar,
    ProjetoDecretoLegislativo,
    ProjetoResolucao,
    Indicacao,
    Mocao,
    Requerimento,
    Emenda,
}

impl ProposalType {
    /// Law-like types subject to the reserved-initiative scan (RN-020).
    pub fn is_law_like(&self) -> bool {
        matches!(
            self,
            ProposalType::ProjetoLei
                | ProposalType::ProjetoLeiComplementar
                | ProposalType::ProjetoDecretoLegislativo
        )
    }

    /// Project-like types require justificativa and full body text (RN-022).
    pub fn is_project_like(&self) -> bool {
        matches!(
            self,
            ProposalType::ProjetoLei
                | ProposalType::ProjetoLeiComplementar
                | ProposalType::ProjetoDecretoLegislativo
                | ProposalType::ProjetoResolucao
        )
    }

    /// Resolutions and legislative decrees skip executive sanction and are
    /// promulgated by the chamber directly.
    pub fn bypasses_sanction(&self) -> bool {
        matches!(
            self,
            ProposalType::ProjetoResolucao | ProposalType::ProjetoDecretoLegislativo
        )
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthorKind {
    Parlamentar,
    Executivo,
    Comissao,
    Cidadao,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionType {
    Ordinaria,
    Extraordinaria,
    Solene,
    Audiencia,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgendaSection {
    Expediente,
    OrdemDoDia,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VetoKind {
    Total,
    Parcial,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VetoMotive {
    Inconstitucionalidade,
    InteressePublico,
}
