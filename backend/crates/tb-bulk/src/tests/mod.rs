mod orchestrator_rank;
