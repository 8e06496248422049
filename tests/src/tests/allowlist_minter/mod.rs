mod treasury;
